//! Digit-box code entry and resend-cooldown primitives shared by the
//! auth screens.

/// Code length on the login and registration screens.
pub const CODE_LENGTH: usize = 6;
/// The standalone verification screen uses a shorter code.
pub const SHORT_CODE_LENGTH: usize = 4;
/// Seconds before "Resend" becomes available again.
pub const RESEND_COOLDOWN_SECS: u32 = 59;

/// A row of single-digit input boxes with one active (focused) box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpInput {
    digits: Vec<Option<u8>>,
    active: usize,
}

impl OtpInput {
    pub fn new(len: usize) -> Self {
        Self {
            digits: vec![None; len],
            active: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.iter().all(Option::is_none)
    }

    /// Index of the focused box.
    pub fn active_box(&self) -> usize {
        self.active
    }

    /// Type a digit into the active box and advance focus.
    pub fn enter_digit(&mut self, digit: u8) {
        if digit > 9 {
            return;
        }
        self.digits[self.active] = Some(digit);
        if self.active + 1 < self.digits.len() {
            self.active += 1;
        }
    }

    /// Backspace clears the active box; on an already-empty box it only
    /// steps focus back.
    pub fn backspace(&mut self) {
        if self.digits[self.active].is_some() {
            self.digits[self.active] = None;
        } else if self.active > 0 {
            self.active -= 1;
        }
    }

    /// Fill boxes from the leading digits of pasted text.
    pub fn paste(&mut self, text: &str) {
        let pasted: Vec<u8> = text
            .chars()
            .filter_map(|c| c.to_digit(10).map(|d| d as u8))
            .take(self.digits.len())
            .collect();
        if pasted.is_empty() {
            return;
        }
        for (i, slot) in self.digits.iter_mut().enumerate() {
            *slot = pasted.get(i).copied();
        }
        self.active = pasted.len().min(self.digits.len() - 1);
    }

    pub fn is_complete(&self) -> bool {
        self.digits.iter().all(Option::is_some)
    }

    /// The full code, only once every box is filled.
    pub fn code(&self) -> Option<String> {
        self.is_complete().then(|| {
            self.digits
                .iter()
                .flatten()
                .map(|d| char::from(b'0' + *d))
                .collect()
        })
    }

    pub fn clear(&mut self) {
        self.digits.fill(None);
        self.active = 0;
    }
}

/// Countdown gating the "Resend code" action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResendCooldown {
    remaining_secs: u32,
}

impl ResendCooldown {
    pub fn start() -> Self {
        Self {
            remaining_secs: RESEND_COOLDOWN_SECS,
        }
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// One-second timer tick.
    pub fn tick(&mut self) {
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
    }

    pub fn can_resend(&self) -> bool {
        self.remaining_secs == 0
    }

    /// Refills the timer; allowed only once the cooldown has run out.
    pub fn restart(&mut self) -> bool {
        if !self.can_resend() {
            return false;
        }
        self.remaining_secs = RESEND_COOLDOWN_SECS;
        true
    }
}
