//! Passcode screen shown before the portfolio.
//!
//! The expected digest ships with the binary, so anyone can read it. This only
//! keeps casual visitors out.

use rand::Rng;
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::constants::*;
use crate::error::GateError;
use crate::input::Key;

pub const INCORRECT_PASSCODE: &str = "Incorrect passcode";

#[derive(Debug)]
pub struct PasscodeGate {
    expected: [u8; 32],
    unlocked: bool,
    input: String,
    error: Option<&'static str>,
    shake_timer: f32,
}

impl PasscodeGate {
    pub fn new(hash_hex: &str) -> Result<Self, GateError> {
        let bytes = hex::decode(hash_hex.trim())?;
        let expected: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| GateError::WrongLength(bytes.len()))?;
        Ok(Self {
            expected,
            unlocked: false,
            input: String::new(),
            error: None,
            shake_timer: 0.0,
        })
    }

    /// A gate that starts unlocked for this session.
    pub fn unlocked() -> Self {
        Self {
            expected: [0; 32],
            unlocked: true,
            input: String::new(),
            error: None,
            shake_timer: 0.0,
        }
    }

    /// Check `passcode` against the digest. Empty input is ignored.
    pub fn attempt_unlock(&mut self, passcode: &str) -> bool {
        if self.unlocked {
            return true;
        }
        if passcode.is_empty() {
            return false;
        }

        let digest = Sha256::digest(passcode.as_bytes());
        if digest.as_slice() == self.expected.as_slice() {
            info!("portfolio unlocked");
            self.unlocked = true;
            self.input.clear();
            self.error = None;
            self.shake_timer = 0.0;
        } else {
            warn!("rejected passcode attempt");
            self.error = Some(INCORRECT_PASSCODE);
            self.shake_timer = SHAKE_DURATION;
        }
        self.unlocked
    }

    pub fn type_char(&mut self, c: char) {
        if !self.unlocked {
            self.input.push(c);
        }
    }

    pub fn handle_key(&mut self, key: Key) {
        match key {
            Key::Backspace => {
                self.input.pop();
            }
            Key::Enter => self.submit(),
            _ => {}
        }
    }

    pub fn submit(&mut self) {
        let passcode = self.input.clone();
        self.attempt_unlock(&passcode);
    }

    pub fn update(&mut self, dt: f32) {
        self.shake_timer = (self.shake_timer - dt).max(0.0);
    }

    /// Horizontal jitter of the input field while shaking.
    pub fn shake_offset(&self) -> f32 {
        if self.shake_timer <= 0.0 {
            return 0.0;
        }
        let strength = self.shake_timer / SHAKE_DURATION;
        rand::rng().random_range(-SHAKE_AMPLITUDE..SHAKE_AMPLITUDE) * strength
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn is_shaking(&self) -> bool {
        self.shake_timer > 0.0
    }

    /// The overlay suspends page scrolling until unlocked.
    pub fn locks_scroll(&self) -> bool {
        !self.unlocked
    }

    pub fn error(&self) -> Option<&str> {
        self.error
    }

    /// The typed passcode, masked.
    pub fn masked_input(&self) -> String {
        "*".repeat(self.input.chars().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> PasscodeGate {
        PasscodeGate::new(DEFAULT_PASSCODE_HASH).unwrap()
    }

    #[test]
    fn test_correct_passcode_unlocks() {
        let mut gate = gate();
        assert!(gate.locks_scroll());
        assert!(gate.attempt_unlock("open sesame"));
        assert!(gate.is_unlocked());
        assert!(!gate.locks_scroll());
        assert_eq!(gate.error(), None);
    }

    #[test]
    fn test_wrong_passcode_shakes() {
        let mut gate = gate();
        assert!(!gate.attempt_unlock("open says me"));
        assert_eq!(gate.error(), Some(INCORRECT_PASSCODE));
        assert!(gate.is_shaking());
        assert!(gate.shake_offset().abs() <= SHAKE_AMPLITUDE);

        gate.update(SHAKE_DURATION);
        assert!(!gate.is_shaking());
        assert_eq!(gate.shake_offset(), 0.0);
        assert!(gate.locks_scroll());
    }

    #[test]
    fn test_empty_passcode_is_ignored() {
        let mut gate = gate();
        assert!(!gate.attempt_unlock(""));
        assert_eq!(gate.error(), None);
        assert!(!gate.is_shaking());
    }

    #[test]
    fn test_typing_and_enter() {
        let mut gate = gate();
        for c in "open sesamex".chars() {
            gate.type_char(c);
        }
        assert_eq!(gate.masked_input(), "************");
        gate.handle_key(Key::Backspace);
        gate.handle_key(Key::Enter);
        assert!(gate.is_unlocked());
        assert_eq!(gate.masked_input(), "");
    }

    #[test]
    fn test_invalid_hash_is_rejected() {
        assert!(matches!(PasscodeGate::new("zz"), Err(GateError::InvalidHash(_))));
        assert!(matches!(PasscodeGate::new("abcd"), Err(GateError::WrongLength(2))));
    }

    #[test]
    fn test_unlocked_gate_accepts_anything() {
        let mut gate = PasscodeGate::unlocked();
        assert!(gate.attempt_unlock("whatever"));
        assert!(!gate.locks_scroll());
    }
}
