use anchor_lang::prelude::*;

use crate::{constants::FIRST_ID, error::ErrorCode};

/// Singleton holding the id counters for campaigns and acts.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct Registry {
    /// Account that initialized the program
    pub authority: Pubkey,
    /// Id the next campaign will get
    pub next_campaign_id: u64,
    /// Id the next act will get. Shared by all campaigns.
    pub next_act_id: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl Registry {
    pub fn init(&mut self, authority: Pubkey, bump: u8) {
        self.authority = authority;
        self.next_campaign_id = FIRST_ID;
        self.next_act_id = FIRST_ID;
        self.bump = bump;
    }

    /// Hands out `next_campaign_id` and advances the counter.
    pub fn claim_campaign_id(&mut self) -> Result<u64> {
        let id = self.next_campaign_id;
        self.next_campaign_id = id.checked_add(1).ok_or(ErrorCode::Overflow)?;
        Ok(id)
    }

    /// Hands out `next_act_id` and advances the counter.
    pub fn claim_act_id(&mut self) -> Result<u64> {
        let id = self.next_act_id;
        self.next_act_id = id.checked_add(1).ok_or(ErrorCode::Overflow)?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_start_at_one_and_are_sequential() {
        let mut registry = Registry::default();
        registry.init(Pubkey::new_unique(), 255);

        assert_eq!(registry.claim_campaign_id().unwrap(), 1);
        assert_eq!(registry.claim_campaign_id().unwrap(), 2);
        assert_eq!(registry.next_campaign_id, 3);
    }

    #[test]
    fn act_ids_are_independent_of_campaign_ids() {
        let mut registry = Registry::default();
        registry.init(Pubkey::new_unique(), 255);

        registry.claim_campaign_id().unwrap();
        assert_eq!(registry.claim_act_id().unwrap(), 1);
        assert_eq!(registry.claim_act_id().unwrap(), 2);
        assert_eq!(registry.next_campaign_id, 2);
    }

    #[test]
    fn exhausted_counter_is_left_untouched() {
        let mut registry = Registry {
            next_act_id: u64::MAX,
            ..Default::default()
        };

        let err = registry.claim_act_id().unwrap_err();
        assert_eq!(err, anchor_lang::error::Error::from(ErrorCode::Overflow));
        assert_eq!(registry.next_act_id, u64::MAX);
    }
}
