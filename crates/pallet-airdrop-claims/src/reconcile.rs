//! The reconciliation of the claims records driven by the cross-chain transfers.

use frame_support::{
    dispatch::DispatchResult,
    ensure,
    log::{debug, error},
    sp_runtime::{
        traits::{CheckedAdd, Get},
        ArithmeticError,
    },
    storage::with_storage_layer,
    traits::{Contains, Time},
};

use crate::{
    packet::{is_canonical_amount, parse_amount, Acknowledgement, TransferPacket},
    traits::AddressParser,
    types::{Action, ClaimSplit, ClaimsRecord},
    Claims, ClaimsRecordOf, Config, CurrentParams, Error, Event, Pallet, ParamsOf,
};

impl<T: Config> Pallet<T> {
    /// Handle the acknowledgement of an outbound transfer: the sender completes the cross-chain
    /// transfer action.
    pub fn on_acknowledgement_packet(
        packet: &TransferPacket,
        acknowledgement: &Acknowledgement,
    ) -> DispatchResult {
        if !acknowledgement.is_success() {
            return Ok(());
        }

        let params = <CurrentParams<T>>::get();
        if !params.is_claims_active(T::Time::now()) {
            return Ok(());
        }

        let sender =
            T::AddressParser::parse(&packet.data.sender).ok_or(Error::<T>::MalformedAddress)?;

        if !<Claims<T>>::contains_key(&sender) {
            return Ok(());
        }

        Self::claim_for_action(&sender, Action::IbcTransfer, &params)?;

        Ok(())
    }

    /// Handle an inbound transfer, returning the acknowledgement to send back.
    ///
    /// Any failure rolls back everything done for the packet and turns into an error
    /// acknowledgement.
    pub fn on_recv_packet(
        packet: &TransferPacket,
        acknowledgement: Acknowledgement,
    ) -> Acknowledgement {
        if !acknowledgement.is_success() {
            return acknowledgement;
        }

        let params = <CurrentParams<T>>::get();
        let now = T::Time::now();
        if !params.is_claims_active(now) {
            return acknowledgement;
        }

        match with_storage_layer(|| Self::reconcile(packet, &params, now)) {
            Ok(()) => acknowledgement,
            Err(err) => {
                error!("airdrop claims: rejecting inbound transfer: {err:?}");
                Acknowledgement::from_error(err)
            }
        }
    }

    /// Reconcile the records of the transfer parties.
    fn reconcile(packet: &TransferPacket, params: &ParamsOf<T>, now: T::Moment) -> DispatchResult {
        let data = &packet.data;
        let channel = packet.destination_channel.as_slice();

        let sender = T::AddressParser::parse(&data.sender).ok_or(Error::<T>::MalformedAddress)?;
        let recipient =
            T::AddressParser::parse(&data.receiver).ok_or(Error::<T>::MalformedAddress)?;

        ensure!(
            !T::BlockedAccounts::contains(&sender) && !T::BlockedAccounts::contains(&recipient),
            Error::<T>::BlockedAddress
        );

        let sender_record = <Claims<T>>::get(&sender);

        // The sender already went through the reconciliation.
        if matches!(&sender_record, Some(record) if record.has_claimed(Action::IbcTransfer)) {
            return Ok(());
        }

        let is_same_address = sender == recipient;
        let is_evm_channel = params.is_evm_channel(channel);
        let is_authorized_channel = params.is_authorized_channel(channel);

        // The same address on a non-EVM chain can not be a valid recipient here, reject the
        // transfer unless the record shows the address is already in use.
        if is_same_address && !is_evm_channel {
            return match sender_record {
                // Nothing to recover.
                None => Ok(()),
                Some(_) if !is_authorized_channel => Err(Error::<T>::UnauthorizedChannel.into()),
                Some(record) if !record.has_claimed_any() => {
                    Err(Error::<T>::UnsupportedRecipient.into())
                }
                Some(_) => Ok(()),
            };
        }

        if !is_authorized_channel && !is_evm_channel {
            return Ok(());
        }

        let recipient_record = if is_same_address {
            sender_record
        } else {
            <Claims<T>>::get(&recipient)
        };

        let amount = parse_amount(&data.amount).ok_or(Error::<T>::InvalidTransferAmount)?;
        let is_trigger_amount =
            amount == T::TriggerAmount::get() && is_canonical_amount(&data.amount);

        match (sender_record, recipient_record) {
            (Some(sender_record), Some(recipient_record)) if !is_same_address => {
                if !is_trigger_amount {
                    return Ok(());
                }
                Self::merge_claims_records(
                    &sender,
                    &recipient,
                    sender_record,
                    recipient_record,
                    params,
                    now,
                )
            }
            (Some(sender_record), None) => {
                if !is_trigger_amount {
                    return Ok(());
                }
                Self::migrate_claims_record(&sender, &recipient, sender_record, params, now)
            }
            (_, Some(recipient_record)) => {
                Self::claim_with_record(
                    &recipient,
                    recipient_record,
                    Action::IbcTransfer,
                    params,
                    now,
                )?;
                Ok(())
            }
            (None, None) => Ok(()),
        }
    }

    /// Merge the sender record into the recipient record.
    ///
    /// The recipient receives the sender shares of the actions it already completed, and both
    /// shares of the cross-chain transfer action.
    fn merge_claims_records(
        sender: &T::AccountId,
        recipient: &T::AccountId,
        sender_record: ClaimsRecordOf<T>,
        recipient_record: ClaimsRecordOf<T>,
        params: &ParamsOf<T>,
        now: T::Moment,
    ) -> DispatchResult {
        ensure!(
            !sender_record.has_claimed_any(),
            Error::<T>::SenderHasCompletedActions
        );

        let initial_claimable_amount = sender_record
            .initial_claimable_amount
            .checked_add(&recipient_record.initial_claimable_amount)
            .ok_or(ArithmeticError::Overflow)?;

        let mut merged = ClaimsRecord {
            initial_claimable_amount,
            actions_completed: recipient_record.actions_completed,
        };

        let mut payout = ClaimSplit::default();
        for action in Action::CLAIMABLE {
            if recipient_record.has_claimed(action) {
                payout.accrue(Self::claim_split(&sender_record, action, now, params)?);
            } else if action == Action::IbcTransfer {
                payout.accrue(Self::claim_split(&sender_record, action, now, params)?);
                payout.accrue(Self::claim_split(&recipient_record, action, now, params)?);
                merged.mark_claimed(action);
            }
        }

        Self::pay_out(recipient, payout)?;

        <Claims<T>>::remove(sender);
        Self::store_claims_record(recipient, merged);

        debug!("airdrop claims: merged {sender:?} into {recipient:?}");

        Self::deposit_event(Event::ClaimsRecordsMerged {
            sender: sender.clone(),
            recipient: recipient.clone(),
            claimed: payout.claimable,
            remainder: payout.remainder,
        });

        Ok(())
    }

    /// Move the sender record to the recipient, and claim the cross-chain transfer action for
    /// the recipient.
    fn migrate_claims_record(
        sender: &T::AccountId,
        recipient: &T::AccountId,
        record: ClaimsRecordOf<T>,
        params: &ParamsOf<T>,
        now: T::Moment,
    ) -> DispatchResult {
        <Claims<T>>::remove(sender);
        <Claims<T>>::insert(recipient, record);

        debug!("airdrop claims: migrated {sender:?} to {recipient:?}");

        Self::deposit_event(Event::ClaimsRecordMigrated {
            from: sender.clone(),
            to: recipient.clone(),
        });

        Self::claim_with_record(recipient, record, Action::IbcTransfer, params, now)?;

        Ok(())
    }
}
