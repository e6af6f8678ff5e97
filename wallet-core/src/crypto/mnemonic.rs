// wallet-core/src/crypto/mnemonic.rs
//
// Mnemonic Module - BIP-39 phrase handling
// Chuẩn: BIP-39 (Mnemonic), PBKDF2-HMAC-SHA512 (Seed Derivation)

use crate::error::{MnemonicError, WalletError, WalletResult};
use bip39::Mnemonic;
use rand::{rngs::OsRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Số lượng words hỗ trợ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCount {
    /// 12 words (128-bit entropy)
    Twelve = 12,
    /// 15 words (160-bit entropy)
    Fifteen = 15,
    /// 18 words (192-bit entropy)
    Eighteen = 18,
    /// 21 words (224-bit entropy)
    TwentyOne = 21,
    /// 24 words (256-bit entropy)
    TwentyFour = 24,
}

impl WordCount {
    /// Lấy số bytes entropy cần thiết
    #[inline]
    pub const fn entropy_bytes(self) -> usize {
        match self {
            WordCount::Twelve => 16,
            WordCount::Fifteen => 20,
            WordCount::Eighteen => 24,
            WordCount::TwentyOne => 28,
            WordCount::TwentyFour => 32,
        }
    }
}

/// Validated BIP-39 phrase.
///
/// # Security
/// - **ZeroizeOnDrop**: phrase is overwritten when the value is dropped
/// - **CSPRNG**: fresh phrases use `OsRng`
/// - **No Debug Leak**: custom `Debug` never prints the phrase
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct WalletMnemonic {
    phrase: String,
    word_count: usize,
}

// Custom Debug - KHÔNG BAO GIỜ hiển thị mnemonic phrase
impl std::fmt::Debug for WalletMnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletMnemonic")
            .field("word_count", &self.word_count)
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl WalletMnemonic {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Fresh 12-word phrase (128-bit entropy).
    pub fn generate() -> WalletResult<Self> {
        Self::with_word_count(WordCount::Twelve)
    }

    /// Fresh phrase with the requested length.
    pub fn with_word_count(word_count: WordCount) -> WalletResult<Self> {
        let entropy_size = word_count.entropy_bytes();

        // Stack-allocated entropy buffer (max 32 bytes)
        let mut entropy = [0u8; 32];
        OsRng.fill_bytes(&mut entropy[..entropy_size]);

        let mnemonic = Mnemonic::from_entropy(&entropy[..entropy_size])
            .map_err(|e| MnemonicError::Bip39Error(e.to_string()));

        // Zeroize entropy ngay sau khi sử dụng
        entropy.zeroize();

        Ok(Self {
            phrase: mnemonic?.to_string(),
            word_count: word_count as usize,
        })
    }

    /// Parse and validate an existing phrase.
    ///
    /// # Validation
    /// - word count (12, 15, 18, 21, 24)
    /// - every word in the English BIP-39 wordlist
    /// - checksum
    pub fn from_phrase(phrase: &str) -> WalletResult<Self> {
        // Normalize whitespace và count words
        let normalized = phrase.split_whitespace().collect::<Vec<_>>();
        let count = normalized.len();

        if !matches!(count, 12 | 15 | 18 | 21 | 24) {
            return Err(MnemonicError::InvalidWordCount(count).into());
        }

        let normalized_phrase = normalized.join(" ");
        Self::parse(&normalized_phrase)?;

        Ok(Self {
            phrase: normalized_phrase,
            word_count: count,
        })
    }

    fn parse(phrase: &str) -> WalletResult<Mnemonic> {
        Mnemonic::parse_normalized(phrase).map_err(|e| {
            let error = match e {
                bip39::Error::UnknownWord(idx) => MnemonicError::UnknownWord(
                    phrase
                        .split_whitespace()
                        .nth(idx)
                        .unwrap_or_default()
                        .to_string(),
                ),
                bip39::Error::InvalidChecksum => MnemonicError::ChecksumFailed,
                bip39::Error::BadWordCount(count) => MnemonicError::InvalidWordCount(count),
                other => MnemonicError::Bip39Error(other.to_string()),
            };
            WalletError::InvalidMnemonic(error)
        })
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// Lấy mnemonic phrase
    ///
    /// # Warning
    /// Cẩn thận khi hiển thị hoặc log giá trị này!
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn words(&self) -> Vec<&str> {
        self.phrase.split_whitespace().collect()
    }

    // =========================================================================
    // SEED DERIVATION
    // =========================================================================

    /// 64-byte BIP-39 seed (PBKDF2-HMAC-SHA512, 2048 rounds).
    ///
    /// An absent passphrase is the empty string.
    pub fn to_seed(&self, passphrase: Option<&str>) -> WalletResult<Zeroizing<[u8; 64]>> {
        let mnemonic = Self::parse(&self.phrase)?;
        Ok(Zeroizing::new(mnemonic.to_seed(passphrase.unwrap_or(""))))
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// Full validation: word count, wordlist, checksum
    #[inline]
    pub fn validate(phrase: &str) -> bool {
        Self::from_phrase(phrase).is_ok()
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
