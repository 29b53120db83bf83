//! Friend records and the balance status derived from them.

use std::fmt;

use uuid::Uuid;

/// Base avatar URL. Seeds and new friends append a per-friend suffix.
pub const AVATAR_BASE_URL: &str = "https://i.pravatar.cc/48";

/// Stable identifier of a friend for the lifetime of the session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FriendId(String);

impl FriendId {
    /// A fresh random (v4) identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl From<u32> for FriendId {
    fn from(n: u32) -> Self {
        Self(n.to_string())
    }
}

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One friend and the running balance between them and the user.
///
/// A negative balance means the user owes the friend, a positive one means
/// the friend owes the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    pub image: String,
    pub balance: i64,
}

impl Friend {
    pub fn status(&self) -> BalanceStatus {
        BalanceStatus::from_balance(self.balance)
    }

    /// Human-readable status line shown under the friend's name.
    pub fn status_message(&self) -> String {
        match self.status() {
            BalanceStatus::YouOwe(amount) => format!("You owe {} {}", self.name, amount),
            BalanceStatus::OwesYou(amount) => format!("{} owes you {}", self.name, amount),
            BalanceStatus::Even => format!("You and {} are even.", self.name),
        }
    }
}

/// Which side of the relationship currently owes money.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceStatus {
    YouOwe(u64),
    OwesYou(u64),
    Even,
}

impl BalanceStatus {
    pub fn from_balance(balance: i64) -> Self {
        match balance {
            b if b < 0 => Self::YouOwe(b.unsigned_abs()),
            b if b > 0 => Self::OwesYou(b.unsigned_abs()),
            _ => Self::Even,
        }
    }
}

/// The fixed set of friends every session starts with.
pub fn seed_friends() -> Vec<Friend> {
    [(118836u32, "Clark", -7), (933372, "Sarah", 20), (499476, "Anthony", 0)]
        .into_iter()
        .map(|(id, name, balance)| Friend {
            id: FriendId::from(id),
            name: name.to_string(),
            image: format!("{AVATAR_BASE_URL}?u={id}"),
            balance,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn friend(balance: i64) -> Friend {
        Friend {
            id: FriendId::from(1u32),
            name: "Bob".into(),
            image: AVATAR_BASE_URL.into(),
            balance,
        }
    }

    #[test]
    fn status_message_follows_sign_of_balance() {
        assert_eq!(friend(-7).status_message(), "You owe Bob 7");
        assert_eq!(friend(20).status_message(), "Bob owes you 20");
        assert_eq!(friend(0).status_message(), "You and Bob are even.");
    }

    #[test]
    fn exactly_one_status_per_balance() {
        for balance in [-100, -1, 0, 1, 100] {
            let status = BalanceStatus::from_balance(balance);
            let expected = match balance.signum() {
                -1 => BalanceStatus::YouOwe(balance.unsigned_abs()),
                1 => BalanceStatus::OwesYou(balance.unsigned_abs()),
                _ => BalanceStatus::Even,
            };
            assert_eq!(status, expected);
        }
    }

    #[test]
    fn extreme_negative_balance_does_not_overflow() {
        assert_eq!(
            BalanceStatus::from_balance(i64::MIN),
            BalanceStatus::YouOwe(1u64 << 63)
        );
    }

    #[test]
    fn seeds_are_unique_and_ordered() {
        let seeds = seed_friends();
        let names: Vec<_> = seeds.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Clark", "Sarah", "Anthony"]);
        assert_eq!(seeds[0].image, "https://i.pravatar.cc/48?u=118836");
        assert_eq!(seeds[0].balance, -7);
        assert_ne!(seeds[0].id, seeds[1].id);
        assert_ne!(seeds[1].id, seeds[2].id);
    }

    #[test]
    fn random_ids_differ() {
        assert_ne!(FriendId::random(), FriendId::random());
    }
}
