//! In-memory account directory.

use std::collections::HashMap;

use domain::{Account, UserId};

/// Read-only set of accounts known to the identity provider.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    accounts: HashMap<UserId, Account>,
}

impl UserDirectory {
    pub fn new(accounts: impl IntoIterator<Item = Account>) -> Self {
        Self {
            accounts: accounts.into_iter().map(|a| (a.id, a)).collect(),
        }
    }

    pub fn get(&self, id: UserId) -> Option<&Account> {
        self.accounts.get(&id)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::Role;

    #[test]
    fn later_duplicates_replace_earlier_accounts() {
        let directory = UserDirectory::new(vec![
            Account::new(1, "first", Role::Subscriber),
            Account::new(1, "second", Role::Editor),
        ]);
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.get(1).unwrap().nickname, "second");
        assert!(directory.get(2).is_none());
    }
}
