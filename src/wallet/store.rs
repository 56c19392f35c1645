//! Wallet file persistence
//!
//! `.dat` files of pretty-printed JSON under a `wallets/` directory.
//! Loading always runs the full integrity check: a record whose public key
//! or address disagrees with its private key is rejected, not repaired.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::wallet::{Wallet, WalletError};

/// Characters not allowed in wallet filenames
const INVALID_FILENAME_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Sanitize a user-supplied wallet name into a `.dat` filename
fn wallet_filename(name: &str) -> String {
    let mut clean: String = name
        .trim()
        .chars()
        .map(|c| {
            if INVALID_FILENAME_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect();

    if !clean.ends_with(".dat") {
        clean.push_str(".dat");
    }
    clean
}

/// List wallet files (`*.dat`) in a directory, sorted by name
pub fn list_wallets(dir: &Path) -> Result<Vec<String>, WalletError> {
    let mut names = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if name.ends_with(".dat") {
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}

/// Next free number for auto-named `wallet_N.dat` files
pub fn next_wallet_number(dir: &Path) -> u32 {
    let mut max = 0;

    if let Ok(names) = list_wallets(dir) {
        for name in names {
            if let Some(stem) = name
                .strip_prefix("wallet_")
                .and_then(|rest| rest.strip_suffix(".dat"))
            {
                if let Ok(num) = stem.parse::<u32>() {
                    max = max.max(num);
                }
            }
        }
    }

    max + 1
}

/// Save a wallet record to `dir`, returning the written path
///
/// With `name` = `None` the file is auto-numbered `wallet_N.dat`.
pub fn save_wallet(
    wallet: &Wallet,
    dir: &Path,
    name: Option<&str>,
) -> Result<PathBuf, WalletError> {
    fs::create_dir_all(dir)?;

    let filename = match name {
        Some(name) => wallet_filename(name),
        None => format!("wallet_{}.dat", next_wallet_number(dir)),
    };

    let path = dir.join(filename);
    let data = serde_json::to_string_pretty(wallet)?;
    fs::write(&path, data)?;

    info!("Saved wallet {} to {}", wallet.address(), path.display());
    Ok(path)
}

/// Load a wallet record from a file and verify its integrity
///
/// Lowercased addresses from legacy records are repaired before checking;
/// any public key or address mismatch aborts the load.
pub fn load_wallet(path: &Path) -> Result<Wallet, WalletError> {
    if !path.exists() {
        return Err(WalletError::NotFound(path.display().to_string()));
    }

    let data = fs::read_to_string(path)?;
    let mut wallet: Wallet = serde_json::from_str(&data)?;

    if !crate::address::validate_address(wallet.address()) {
        warn!(
            "Wallet {} has a non-canonical address, normalizing case",
            path.display()
        );
        wallet.normalize_address();
    }

    wallet.verify_integrity()?;

    info!("Loaded wallet {} from {}", wallet.address(), path.display());
    Ok(wallet)
}
