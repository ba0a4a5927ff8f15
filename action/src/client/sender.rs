//! Building, signing and submitting envelopes on behalf of an account.
use anyhow::Result;
use num_traits::Zero;
use slog::{debug, info, Logger};

use super::{units, GasPriceOracle, NonceSource, Receipt, Submitter};
use crate::{
    action::{
        Action, ClaimFromRewardingFundBuilder, Envelope, EnvelopeBuilder, Payload, SignedEnvelope,
    },
    common::{
        address::Address, crypto::signature::Signer, logger::get_logger, quantity::Quantity,
    },
    config::Config,
};

/// Sends actions signed by a single account.
pub struct Sender<'a> {
    config: Config,
    signer: &'a dyn Signer,
    nonces: &'a dyn NonceSource,
    gas_prices: &'a dyn GasPriceOracle,
    submitter: &'a dyn Submitter,
    logger: Logger,
}

impl<'a> Sender<'a> {
    pub fn new(
        config: Config,
        signer: &'a dyn Signer,
        nonces: &'a dyn NonceSource,
        gas_prices: &'a dyn GasPriceOracle,
        submitter: &'a dyn Submitter,
    ) -> Self {
        Self {
            config,
            signer,
            nonces,
            gas_prices,
            submitter,
            logger: get_logger("client/sender"),
        }
    }

    /// Address of the signing account.
    pub fn address(&self) -> Address {
        Address::from_pk(&self.signer.public())
    }

    /// Gas limit to authorize for the action.
    ///
    /// A configured limit of zero is replaced by the action's intrinsic gas,
    /// i.e. `base + per_byte * len(data)`.
    pub fn gas_limit(&self, action: &Action) -> Result<u64> {
        if self.config.gas_limit != 0 {
            return Ok(self.config.gas_limit);
        }
        Ok(action.intrinsic_gas()?)
    }

    /// Gas price to offer, from configuration or the oracle.
    pub fn gas_price(&self) -> Result<Quantity> {
        match &self.config.gas_price {
            Some(gas_price) => Ok(gas_price.clone()),
            None => self.gas_prices.suggested_gas_price(),
        }
    }

    /// Builds the envelope for the action with the account's next nonce.
    pub fn prepare(&self, action: impl Into<Action>) -> Result<Envelope> {
        let action = action.into();
        let nonce = self.nonces.current_nonce(&self.address())?;

        let (gas_limit, gas_price) = if action.is_system() {
            (0, Quantity::zero())
        } else {
            (self.gas_limit(&action)?, self.gas_price()?)
        };

        debug!(self.logger, "prepared envelope";
            "nonce" => nonce,
            "gas_limit" => gas_limit,
            "gas_price" => %gas_price
        );

        Ok(EnvelopeBuilder::new()
            .set_nonce(nonce)
            .set_gas_limit(gas_limit)
            .set_gas_price(gas_price)
            .set_action(action)
            .build()?)
    }

    /// Signs and submits a prepared envelope.
    pub fn submit(&self, envelope: Envelope) -> Result<Receipt> {
        let signed = SignedEnvelope::sign(envelope, self.signer)?;
        let hash = signed.hash();

        info!(self.logger, "submitting envelope";
            "sender" => %signed.src_address(),
            "nonce" => signed.envelope().nonce(),
            "hash" => %hash
        );

        self.submitter.submit(signed)
    }

    /// Prepares, signs and submits the action.
    pub fn send(&self, action: impl Into<Action>) -> Result<Receipt> {
        let envelope = self.prepare(action)?;
        self.submit(envelope)
    }

    /// Claims rewards from the rewarding fund.
    ///
    /// `amount` is given in whole tokens with up to 18 decimals.
    pub fn claim_reward(&self, amount: &str, data: Option<&[u8]>) -> Result<Receipt> {
        let amount = units::parse_amount(amount, units::IOTX_DECIMAL_NUM)?;
        let claim = ClaimFromRewardingFundBuilder::new()
            .set_amount(amount)
            .set_data(data.map(<[u8]>::to_vec).unwrap_or_default())
            .build()?;

        self.send(claim)
    }
}
