// SPDX-FileCopyrightText: 2026 Sealvault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed-layout serialization of a [`Vault`].
//!
//! Layout (all slots NUL-padded):
//!
//! ```text
//! [item 0: title | username | password] ... [item 99]   100 * 3 * 100 bytes
//! size                                                  u64 little-endian
//! master password                                       100 bytes
//! ```
//!
//! Slots at and beyond `size` are written as zeros. Decoding is strict: any
//! record that violates the vault invariants is rejected as tampered.

use sealvault_core::{VaultError, FIELD_SLOT_LEN, MAX_ITEMS, MIN_PASSWORD_LEN};
use zeroize::Zeroizing;

use crate::model::{Item, Vault};

const ITEM_LEN: usize = 3 * FIELD_SLOT_LEN;
const ITEMS_LEN: usize = MAX_ITEMS * ITEM_LEN;
const SIZE_LEN: usize = 8;

/// Length of every serialized vault.
pub const PLAINTEXT_LEN: usize = ITEMS_LEN + SIZE_LEN + FIELD_SLOT_LEN;

/// Serialize `vault` into a zeroizing fixed-length buffer.
pub fn encode(vault: &Vault) -> Zeroizing<Vec<u8>> {
    let mut buf = Zeroizing::new(vec![0u8; PLAINTEXT_LEN]);

    for (slot, item) in buf[..ITEMS_LEN]
        .chunks_exact_mut(ITEM_LEN)
        .zip(vault.items())
    {
        let mut fields = slot.chunks_exact_mut(FIELD_SLOT_LEN);
        for value in [item.title(), item.username(), item.password()] {
            if let Some(field) = fields.next() {
                write_field(field, value);
            }
        }
    }

    let size = vault.len() as u64;
    buf[ITEMS_LEN..ITEMS_LEN + SIZE_LEN].copy_from_slice(&size.to_le_bytes());
    write_field(&mut buf[ITEMS_LEN + SIZE_LEN..], vault.master_password());

    buf
}

/// Deserialize a buffer produced by [`encode`].
pub fn decode(buf: &[u8]) -> Result<Vault, VaultError> {
    if buf.len() != PLAINTEXT_LEN {
        return Err(VaultError::Tamper);
    }

    let mut size_bytes = [0u8; SIZE_LEN];
    size_bytes.copy_from_slice(&buf[ITEMS_LEN..ITEMS_LEN + SIZE_LEN]);
    let size = usize::try_from(u64::from_le_bytes(size_bytes))
        .ok()
        .filter(|&size| size <= MAX_ITEMS)
        .ok_or(VaultError::Tamper)?;

    let items = buf[..ITEMS_LEN]
        .chunks_exact(ITEM_LEN)
        .take(size)
        .map(|slot| {
            let mut fields = slot.chunks_exact(FIELD_SLOT_LEN).map(read_field);
            match (fields.next(), fields.next(), fields.next()) {
                (Some(title), Some(username), Some(password)) => {
                    Ok(Item::from_slots(title?, username?, password?))
                }
                _ => Err(VaultError::Tamper),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    let master_password = read_field(&buf[ITEMS_LEN + SIZE_LEN..])?;
    if master_password.len() < MIN_PASSWORD_LEN {
        return Err(VaultError::Tamper);
    }

    Ok(Vault::from_parts(items, master_password))
}

fn write_field(slot: &mut [u8], value: &str) {
    // Callers only hold validated strings, so the terminator always fits.
    let len = value.len().min(slot.len() - 1);
    slot[..len].copy_from_slice(&value.as_bytes()[..len]);
}

fn read_field(slot: &[u8]) -> Result<String, VaultError> {
    let end = slot
        .iter()
        .position(|&b| b == 0)
        .ok_or(VaultError::Tamper)?;
    std::str::from_utf8(&slot[..end])
        .map(str::to_string)
        .map_err(|_| VaultError::Tamper)
}
