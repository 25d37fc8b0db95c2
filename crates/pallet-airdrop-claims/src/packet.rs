//! The cross-chain fungible token transfer packets.

use codec::{Decode, Encode};
use frame_support::{sp_runtime::DispatchError, RuntimeDebug};
use scale_info::TypeInfo;
use sp_std::vec::Vec;

/// The payload of a fungible token transfer packet.
#[derive(Clone, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo)]
pub struct FungibleTokenPacketData {
    /// The denomination of the transferred token.
    pub denom: Vec<u8>,
    /// The transferred amount, as a decimal string.
    pub amount: Vec<u8>,
    /// The sender address.
    pub sender: Vec<u8>,
    /// The receiver address.
    pub receiver: Vec<u8>,
}

/// A fungible token transfer packet.
#[derive(Clone, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo)]
pub struct TransferPacket {
    /// The channel at the sending end.
    pub source_channel: Vec<u8>,
    /// The channel at the receiving end.
    pub destination_channel: Vec<u8>,
    /// The packet payload.
    pub data: FungibleTokenPacketData,
}

/// The acknowledgement of a packet.
#[derive(Clone, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo)]
pub enum Acknowledgement {
    /// The packet was processed, with the opaque result.
    Result(Vec<u8>),
    /// The packet was rejected, with the error message.
    Error(Vec<u8>),
}

impl Acknowledgement {
    /// Whether the acknowledgement is a successful one.
    pub fn is_success(&self) -> bool {
        matches!(self, Acknowledgement::Result(_))
    }

    /// An error acknowledgement describing the given dispatch error.
    pub fn from_error(error: DispatchError) -> Self {
        let message: &'static str = error.into();
        Acknowledgement::Error(message.as_bytes().to_vec())
    }
}

/// Parse the decimal amount string of a packet.
pub fn parse_amount(raw: &[u8]) -> Option<u128> {
    if raw.is_empty() || !raw.iter().all(u8::is_ascii_digit) {
        return None;
    }
    core::str::from_utf8(raw).ok()?.parse().ok()
}

/// Whether the amount is written without leading zeros.
pub fn is_canonical_amount(raw: &[u8]) -> bool {
    match raw {
        [b'0', _, ..] => false,
        _ => !raw.is_empty(),
    }
}
