// SPDX-FileCopyrightText: 2026 Sealvault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal rendering for command results.

use colored::Colorize;
use sealvault_core::VaultState;
use sealvault_vault::{mask_secret, Vault};

/// One green check-marked line.
pub fn success(message: &str) -> String {
    format!("{} {message}", "✓".green())
}

/// Numbered table of the vault's items. The master password is never shown.
pub fn render_vault(vault: &Vault, reveal: bool) -> String {
    if vault.is_empty() {
        return format!("{} vault is empty", "✓".green());
    }

    let mut out = format!(
        "  {:>3}  {:<24} {:<24} {}\n  {}",
        "#".bold(),
        "Title".bold(),
        "Username".bold(),
        "Password".bold(),
        "-".repeat(70)
    );
    for (index, item) in vault.items().iter().enumerate() {
        let password = if reveal {
            item.password().to_string()
        } else {
            mask_secret(item.password())
        };
        out.push_str(&format!(
            "\n  {index:>3}  {:<24} {:<24} {password}",
            item.title(),
            item.username()
        ));
    }
    out.push_str(&format!("\n\n  {} item(s)", vault.len()));
    out
}

/// One line describing what is on disk.
pub fn render_state(state: VaultState) -> String {
    let detail = match state {
        VaultState::Absent => "no vault yet, run `sealvault create`",
        VaultState::Sealed => "vault present and sealed to this machine",
        VaultState::Unreadable => "vault file present but cannot be unsealed",
    };
    let label = match state {
        VaultState::Sealed => state.to_string().green(),
        VaultState::Absent => state.to_string().yellow(),
        VaultState::Unreadable => state.to_string().red(),
    };
    format!("State: {label} ({detail})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_lines_name_the_state() {
        colored::control::set_override(false);
        assert!(render_state(VaultState::Absent).starts_with("State: absent"));
        assert!(render_state(VaultState::Sealed).starts_with("State: sealed"));
        assert!(render_state(VaultState::Unreadable).starts_with("State: unreadable"));
    }

    #[test]
    fn empty_vault_has_no_table() {
        colored::control::set_override(false);
        let vault = Vault::new("longpass1").unwrap();
        let out = render_vault(&vault, true);
        assert!(!out.contains("Title"));
        assert!(out.contains("empty"));
    }
}
