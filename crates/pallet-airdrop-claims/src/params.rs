//! The airdrop parameters.

use codec::{Decode, Encode, MaxEncodedLen};
use decay_schedule_linear::LinearDecay;
use frame_support::{
    sp_runtime::traits::{AtLeast32BitUnsigned, Saturating, Zero},
    traits::ConstU32,
    BoundedVec, RuntimeDebug,
};
#[cfg(feature = "std")]
use frame_support::{Deserialize, Serialize};
use scale_info::TypeInfo;

/// The maximum length of a token denomination.
pub const MAX_DENOM_LENGTH: u32 = 128;
/// The minimum length of a channel identifier.
pub const MIN_CHANNEL_ID_LENGTH: usize = 8;
/// The maximum length of a channel identifier.
pub const MAX_CHANNEL_ID_LENGTH: u32 = 64;
/// The maximum number of channels in each of the channel sets.
pub const MAX_CHANNELS: u32 = 32;

/// The token denomination.
pub type Denom = BoundedVec<u8, ConstU32<MAX_DENOM_LENGTH>>;
/// The cross-chain channel identifier.
pub type ChannelId = BoundedVec<u8, ConstU32<MAX_CHANNEL_ID_LENGTH>>;
/// The set of cross-chain channel identifiers.
pub type ChannelIds = BoundedVec<ChannelId, ConstU32<MAX_CHANNELS>>;

/// A month, in milliseconds.
pub const DEFAULT_DURATION_UNTIL_DECAY: u32 = 2_629_800_000;

/// The reasons the params can be rejected for.
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum ParamsError {
    /// One of the durations is zero.
    InvalidDuration,
    /// The claims denomination is malformed.
    InvalidDenom,
    /// One of the channel identifiers is malformed.
    InvalidChannel,
}

/// The airdrop parameters.
#[derive(Clone, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo, MaxEncodedLen)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub struct Params<Moment> {
    /// Whether the claims are enabled.
    pub enable_claims: bool,
    /// The moment the airdrop starts at.
    pub airdrop_start_time: Moment,
    /// How long the claims stay at full value after the start.
    pub duration_until_decay: Moment,
    /// How long the claims decay for, once the decay starts.
    pub duration_of_decay: Moment,
    /// The denomination of the claimed token.
    ///
    /// Informational only: the runtime has a single native currency, so the claims are always
    /// paid in it, and the incoming transfers reconcile whatever denomination they carry.
    pub claims_denom: Denom,
    /// The channels address migrations are authorized through.
    pub authorized_channels: ChannelIds,
    /// The channels connected to EVM chains.
    pub evm_channels: ChannelIds,
}

impl<Moment> Default for Params<Moment>
where
    Moment: AtLeast32BitUnsigned + Copy,
{
    fn default() -> Self {
        let month = Moment::from(DEFAULT_DURATION_UNTIL_DECAY);
        Self {
            enable_claims: true,
            airdrop_start_time: Zero::zero(),
            duration_until_decay: month,
            duration_of_decay: month.saturating_mul(Moment::from(2u32)),
            claims_denom: Denom::truncate_from(b"aclaims".to_vec()),
            authorized_channels: channel_ids(&["channel-0", "channel-3"]),
            evm_channels: channel_ids(&["channel-2"]),
        }
    }
}

/// Build a channel set out of raw identifiers, the overflow is truncated.
pub fn channel_ids(channels: &[&str]) -> ChannelIds {
    let channels: sp_std::vec::Vec<ChannelId> = channels
        .iter()
        .map(|channel| ChannelId::truncate_from(channel.as_bytes().to_vec()))
        .collect();
    ChannelIds::truncate_from(channels)
}

impl<Moment> Params<Moment>
where
    Moment: AtLeast32BitUnsigned + Copy,
{
    /// The moment the claims start decaying at.
    pub fn decay_start_time(&self) -> Moment {
        self.airdrop_start_time
            .saturating_add(self.duration_until_decay)
    }

    /// The moment the claims reach zero at.
    pub fn airdrop_end_time(&self) -> Moment {
        self.decay_start_time().saturating_add(self.duration_of_decay)
    }

    /// Whether the claims are accepted at the given moment.
    pub fn is_claims_active(&self, now: Moment) -> bool {
        self.enable_claims && now >= self.airdrop_start_time && now <= self.airdrop_end_time()
    }

    /// Whether the airdrop is over and the leftovers have to be clawed back.
    pub fn is_clawback_due(&self, now: Moment) -> bool {
        let elapsed = now.saturating_sub(self.airdrop_start_time);
        self.enable_claims
            && elapsed
                > self
                    .duration_until_decay
                    .saturating_add(self.duration_of_decay)
    }

    /// The decay schedule, counting from the airdrop start.
    pub fn decay_schedule(&self) -> LinearDecay<Moment> {
        LinearDecay {
            until_decay: self.duration_until_decay,
            decay: self.duration_of_decay,
        }
    }

    /// Whether address migrations are authorized through the given channel.
    pub fn is_authorized_channel(&self, channel: &[u8]) -> bool {
        self.authorized_channels
            .iter()
            .any(|authorized| authorized.as_slice() == channel)
    }

    /// Whether the given channel is connected to an EVM chain.
    pub fn is_evm_channel(&self, channel: &[u8]) -> bool {
        self.evm_channels
            .iter()
            .any(|evm| evm.as_slice() == channel)
    }

    /// Check the params are consistent.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.duration_until_decay.is_zero() || self.duration_of_decay.is_zero() {
            return Err(ParamsError::InvalidDuration);
        }

        if !is_valid_denom(&self.claims_denom) {
            return Err(ParamsError::InvalidDenom);
        }

        let all_channels_valid = self
            .authorized_channels
            .iter()
            .chain(self.evm_channels.iter())
            .all(|channel| is_valid_channel_id(channel));
        if !all_channels_valid {
            return Err(ParamsError::InvalidChannel);
        }

        Ok(())
    }
}

/// A denomination is a letter followed by 2 to 127 letters, digits or `/:._-`.
pub fn is_valid_denom(denom: &[u8]) -> bool {
    let (first, rest) = match denom.split_first() {
        Some(split) => split,
        None => return false,
    };

    first.is_ascii_alphabetic()
        && (2..MAX_DENOM_LENGTH as usize).contains(&rest.len())
        && rest
            .iter()
            .all(|c| c.is_ascii_alphanumeric() || b"/:._-".contains(c))
}

/// A channel identifier follows the host identifier rules: 8 to 64 characters out of
/// letters, digits and `._+-#[]<>`.
pub fn is_valid_channel_id(channel: &[u8]) -> bool {
    (MIN_CHANNEL_ID_LENGTH..=MAX_CHANNEL_ID_LENGTH as usize).contains(&channel.len())
        && channel
            .iter()
            .all(|c| c.is_ascii_alphanumeric() || b"._+-#[]<>".contains(c))
}
