// SPDX-FileCopyrightText: 2026 Sealvault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The fixed-capacity vault record the command handlers mutate.
//!
//! Every string is validated against its fixed slot before it is stored, so a
//! [`Vault`] value always satisfies the record invariants: at most
//! [`MAX_ITEMS`] items, every field at most [`MAX_FIELD_LEN`] bytes, and a
//! master password of at least [`MIN_PASSWORD_LEN`] bytes. All operations
//! here are pure; I/O lives in [`crate::service`].

use sealvault_core::{
    VaultError, MAX_FIELD_LEN, MAX_ITEMS, MAX_PASSWORD_LEN, MIN_PASSWORD_LEN,
};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// One stored credential entry.
///
/// Debug output omits the password.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Item {
    title: String,
    username: String,
    password: String,
}

impl std::fmt::Debug for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Item")
            .field("title", &self.title)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Item {
    /// Build an item, rejecting any field longer than its slot.
    ///
    /// Content after an embedded NUL byte is dropped, as the fixed slot
    /// could not represent it.
    pub fn new(title: &str, username: &str, password: &str) -> Result<Self, VaultError> {
        Ok(Self {
            title: slot_string(title, "title")?,
            username: slot_string(username, "username")?,
            password: slot_string(password, "password")?,
        })
    }

    /// Build an item from decoded slot contents already known to fit.
    pub(crate) fn from_slots(title: String, username: String, password: String) -> Self {
        Self {
            title,
            username,
            password,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// The complete secret record: ordered items plus the master password.
///
/// The master password has no public accessor; callers can only test a
/// candidate against it via [`Vault::authorize`].
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Vault {
    items: Vec<Item>,
    master_password: String,
}

impl std::fmt::Debug for Vault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vault")
            .field("size", &self.items.len())
            .field("items", &self.items)
            .field("master_password", &"[REDACTED]")
            .finish()
    }
}

impl Vault {
    /// Create an empty vault protected by `master_password`.
    pub fn new(master_password: &str) -> Result<Self, VaultError> {
        check_password_len(master_password)?;
        Ok(Self {
            items: Vec::with_capacity(MAX_ITEMS),
            master_password: master_password.to_string(),
        })
    }

    /// Reassemble a vault from decoded slots already known to fit.
    pub(crate) fn from_parts(items: Vec<Item>, master_password: String) -> Self {
        debug_assert!(items.len() <= MAX_ITEMS);
        Self {
            items,
            master_password,
        }
    }

    /// Compare `candidate` against the master password in constant time.
    pub fn authorize(&self, candidate: &str) -> bool {
        self.master_password
            .as_bytes()
            .ct_eq(candidate.as_bytes())
            .into()
    }

    /// Append `item` after the last live item.
    pub fn append_item(&mut self, item: Item) -> Result<(), VaultError> {
        if self.items.len() >= MAX_ITEMS {
            return Err(VaultError::Full);
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove the item at `index`, shifting later items left by one.
    pub fn remove_item(&mut self, index: i64) -> Result<(), VaultError> {
        let slot = usize::try_from(index)
            .ok()
            .filter(|&i| i < self.items.len())
            .ok_or(VaultError::NotFound { index })?;
        self.items.remove(slot);
        Ok(())
    }

    /// Replace the master password.
    pub fn set_master_password(&mut self, new_password: &str) -> Result<(), VaultError> {
        check_password_len(new_password)?;
        self.master_password.zeroize();
        self.master_password = new_password.to_string();
        Ok(())
    }

    /// Number of live items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Live items in storage order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub(crate) fn master_password(&self) -> &str {
        &self.master_password
    }
}

/// Reject master passwords outside `MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN` bytes.
pub fn check_password_len(password: &str) -> Result<(), VaultError> {
    let len = password.len();
    if !(MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&len) || password.contains('\0') {
        return Err(VaultError::PasswordOutOfRange { len });
    }
    Ok(())
}

fn slot_string(value: &str, field: &'static str) -> Result<String, VaultError> {
    let content = value.split('\0').next().unwrap_or_default();
    if content.len() > MAX_FIELD_LEN {
        return Err(VaultError::ItemTooLong { field });
    }
    Ok(content.to_string())
}
