//! Pull-payment funds ledger. Sales credit it; only the beneficiary's own
//! withdrawal drains it.

use crate::*;

#[near]
impl Contract {
    pub fn ledger_balance_of(&self, account_id: AccountId) -> U128 {
        U128(self.ledger_balances.get(&account_id).copied().unwrap_or(0))
    }

    /// Withdraw the caller's full accumulated balance. A zero balance is
    /// not an error: nothing is transferred and 0 is returned.
    pub fn withdraw(&mut self) -> U128 {
        let account_id = env::predecessor_account_id();
        let amount = self.ledger_balances.get(&account_id).copied().unwrap_or(0);
        if amount == 0 {
            return U128(0);
        }

        // The balance is zeroed before the transfer is scheduled: a
        // re-entrant withdrawal must observe an empty ledger entry.
        self.ledger_balances.insert(account_id.clone(), 0);
        let _ = Promise::new(account_id).transfer(NearToken::from_yoctonear(amount));

        U128(amount)
    }
}

impl Contract {
    /// Overflow here is an invariant violation, not a user error: the
    /// operation aborts rather than wrapping.
    pub(crate) fn credit_ledger(
        &mut self,
        account_id: &AccountId,
        amount: u128,
    ) -> Result<(), RegistryError> {
        let current = self.ledger_balances.get(account_id).copied().unwrap_or(0);
        let updated = current
            .checked_add(amount)
            .ok_or_else(|| RegistryError::InternalError("Ledger balance overflow".into()))?;
        self.ledger_balances.insert(account_id.clone(), updated);
        Ok(())
    }
}
