//! Form models for adding a friend and for splitting a bill.
//!
//! Both forms only produce values; applying them to the friend list is the
//! job of [`AppState`](crate::app::state::AppState).

use super::error::InputError;
use super::friend::{Friend, FriendId, AVATAR_BASE_URL};
use super::text_field::TextField;

// ───────────────────────────────────────── add friend ────────

/// Name + image URL inputs for a new friend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddFriendForm {
    pub name: TextField,
    pub image_url: TextField,
}

impl Default for AddFriendForm {
    fn default() -> Self {
        Self {
            name: TextField::default(),
            image_url: TextField::with_text(AVATAR_BASE_URL),
        }
    }
}

impl AddFriendForm {
    /// Build a new friend from the inputs and reset them.
    ///
    /// Returns `None` (and leaves the inputs untouched) when either field
    /// is empty.
    pub fn submit(&mut self) -> Option<Friend> {
        if self.name.is_empty() || self.image_url.is_empty() {
            return None;
        }
        let id = FriendId::random();
        let friend = Friend {
            image: format!("{}?={id}", self.image_url.text()),
            name: self.name.text().to_string(),
            balance: 0,
            id,
        };
        *self = Self::default();
        Some(friend)
    }
}

// ───────────────────────────────────────── split bill ────────

/// Who fronted the whole bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Payer {
    #[default]
    User,
    Friend,
}

impl Payer {
    pub fn toggled(self) -> Self {
        match self {
            Self::User => Self::Friend,
            Self::Friend => Self::User,
        }
    }
}

/// The two editable amount inputs of the split-bill form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountField {
    BillTotal,
    UserPaid,
}

/// Split-bill inputs for the currently selected friend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitBillForm {
    bill_input: TextField,
    paid_input: TextField,
    bill_total: Option<i64>,
    user_paid: Option<i64>,
    pub payer: Payer,
}

impl SplitBillForm {
    pub fn user_paid(&self) -> Option<i64> {
        self.user_paid
    }

    /// The friend's share, `bill - your expense`. Unset until a non-zero
    /// bill is entered.
    pub fn friend_paid(&self) -> Option<i64> {
        self.bill_total
            .filter(|&bill| bill != 0)
            .map(|bill| bill - self.user_paid.unwrap_or(0))
    }

    pub fn input(&self, field: AmountField) -> &TextField {
        match field {
            AmountField::BillTotal => &self.bill_input,
            AmountField::UserPaid => &self.paid_input,
        }
    }

    pub fn set_bill_total(&mut self, text: &str) -> Result<(), InputError> {
        self.edit(AmountField::BillTotal, |f| f.set_text(text))
    }

    pub fn set_user_paid(&mut self, text: &str) -> Result<(), InputError> {
        self.edit(AmountField::UserPaid, |f| f.set_text(text))
    }

    pub fn toggle_payer(&mut self) {
        self.payer = self.payer.toggled();
    }

    /// Apply `edit` to one amount input. If the resulting text is not an
    /// acceptable amount the edit is refused and the previous text and
    /// value are kept.
    pub fn edit(
        &mut self,
        field: AmountField,
        edit: impl FnOnce(&mut TextField),
    ) -> Result<(), InputError> {
        let mut candidate = self.input(field).clone();
        edit(&mut candidate);

        // Pure cursor movement never needs revalidation.
        if candidate.text() == self.input(field).text() {
            self.store(field, candidate, None, false);
            return Ok(());
        }

        let value = parse_amount(candidate.text())?;
        if field == AmountField::UserPaid {
            let bill = self.bill_total.unwrap_or(0);
            if let Some(paid) = value.filter(|&paid| paid > bill) {
                return Err(InputError::ExceedsBill { paid, bill });
            }
        }
        self.store(field, candidate, value, true);
        Ok(())
    }

    /// The signed balance adjustment for the selected friend, or `None`
    /// when either amount is missing or zero.
    pub fn submit(&self) -> Option<i64> {
        let user_paid = self.user_paid.filter(|&paid| paid != 0)?;
        let friend_paid = self.friend_paid()?;
        Some(match self.payer {
            Payer::User => friend_paid,
            Payer::Friend => -user_paid,
        })
    }

    fn store(&mut self, field: AmountField, input: TextField, value: Option<i64>, set_value: bool) {
        let (slot, stored) = match field {
            AmountField::BillTotal => (&mut self.bill_input, &mut self.bill_total),
            AmountField::UserPaid => (&mut self.paid_input, &mut self.user_paid),
        };
        *slot = input;
        if set_value {
            *stored = value;
        }
    }
}

/// Parse an amount input: empty means unset, otherwise a non-negative
/// whole number.
fn parse_amount(text: &str) -> Result<Option<i64>, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value: i64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    if value < 0 {
        return Err(InputError::Negative(value));
    }
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(bill: &str, paid: &str) -> SplitBillForm {
        let mut form = SplitBillForm::default();
        form.set_bill_total(bill).unwrap();
        form.set_user_paid(paid).unwrap();
        form
    }

    #[test]
    fn add_friend_builds_zero_balance_friend_and_resets() {
        let mut add = AddFriendForm::default();
        add.name.set_text("Bob");
        add.image_url.set_text("http://x");

        let friend = add.submit().expect("valid form");
        assert_eq!(friend.name, "Bob");
        assert_eq!(friend.balance, 0);
        assert_eq!(friend.image, format!("http://x?={}", friend.id));
        assert_eq!(add, AddFriendForm::default());
        assert_eq!(add.image_url.text(), AVATAR_BASE_URL);
    }

    #[test]
    fn add_friend_with_missing_field_is_noop() {
        let mut add = AddFriendForm::default();
        assert!(add.submit().is_none());

        add.name.set_text("Bob");
        add.image_url.set_text("");
        assert!(add.submit().is_none());
        assert_eq!(add.name.text(), "Bob");
    }

    #[test]
    fn friend_paid_is_bill_minus_user_share() {
        let mut split = SplitBillForm::default();
        assert_eq!(split.friend_paid(), None);

        split.set_bill_total("100").unwrap();
        assert_eq!(split.friend_paid(), Some(100));

        split.set_user_paid("40").unwrap();
        assert_eq!(split.friend_paid(), Some(60));
    }

    #[test]
    fn user_paying_gives_positive_delta() {
        assert_eq!(form("100", "40").submit(), Some(60));
    }

    #[test]
    fn friend_paying_gives_negative_delta() {
        let mut split = form("100", "40");
        split.toggle_payer();
        assert_eq!(split.payer, Payer::Friend);
        assert_eq!(split.submit(), Some(-40));
    }

    #[test]
    fn submit_requires_both_amounts() {
        let mut split = SplitBillForm::default();
        assert_eq!(split.submit(), None);
        split.set_bill_total("100").unwrap();
        assert_eq!(split.submit(), None);
    }

    #[test]
    fn zero_amounts_count_as_missing() {
        let mut split = form("100", "0");
        assert_eq!(split.user_paid(), Some(0));
        assert_eq!(split.submit(), None);
        split.toggle_payer();
        assert_eq!(split.submit(), None);

        let split = form("0", "0");
        assert_eq!(split.friend_paid(), None);
        assert_eq!(split.submit(), None);
    }

    #[test]
    fn user_paid_above_bill_is_refused() {
        let mut split = form("100", "40");
        let err = split.set_user_paid("150").unwrap_err();
        assert_eq!(err, InputError::ExceedsBill { paid: 150, bill: 100 });
        assert_eq!(split.user_paid(), Some(40));
        assert_eq!(split.input(AmountField::UserPaid).text(), "40");
    }

    #[test]
    fn user_paid_without_bill_only_accepts_zero() {
        let mut split = SplitBillForm::default();
        assert!(split.set_user_paid("5").is_err());
        assert_eq!(split.user_paid(), None);
        split.set_user_paid("0").unwrap();
        assert_eq!(split.user_paid(), Some(0));
    }

    #[test]
    fn non_numeric_and_negative_input_is_refused() {
        let mut split = form("100", "40");
        assert_eq!(
            split.set_bill_total("abc"),
            Err(InputError::NotANumber("abc".into()))
        );
        assert_eq!(split.set_bill_total("-3"), Err(InputError::Negative(-3)));
        assert_eq!(split.input(AmountField::BillTotal).text(), "100");
        assert_eq!(split.friend_paid(), Some(60));
    }

    #[test]
    fn typing_digit_by_digit_is_validated_per_keystroke() {
        let mut split = form("50", "");
        for ch in "45".chars() {
            split.edit(AmountField::UserPaid, |f| f.insert(ch)).unwrap();
        }
        assert_eq!(split.user_paid(), Some(45));

        // "459" > 50: refused, "45" kept.
        assert!(split.edit(AmountField::UserPaid, |f| f.insert('9')).is_err());
        assert_eq!(split.input(AmountField::UserPaid).text(), "45");

        split.edit(AmountField::UserPaid, |f| f.backspace()).unwrap();
        split.edit(AmountField::UserPaid, |f| f.backspace()).unwrap();
        assert_eq!(split.user_paid(), None);
    }

    #[test]
    fn cursor_moves_are_never_refused() {
        let mut split = form("100", "80");
        split.set_bill_total("50").unwrap();
        split.edit(AmountField::UserPaid, |f| f.home()).unwrap();
        assert_eq!(split.input(AmountField::UserPaid).cursor_column(), 0);
        assert_eq!(split.user_paid(), Some(80));
    }
}
