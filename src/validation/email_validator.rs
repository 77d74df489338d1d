/// Email shape checker consumed by `EmailValidation`
///
/// Implementations may fail; callers propagate the failure instead of
/// treating it as an invalid email.
pub trait EmailValidator: Send + Sync {
    fn is_valid(&self, email: &str) -> anyhow::Result<bool>;
}

/// Structural email check: a single `@`, a non-empty local part and a dotted
/// domain with no empty labels
#[derive(Debug, Clone, Default)]
pub struct EmailValidatorAdapter;

impl EmailValidatorAdapter {
    /// Longest address accepted (RFC 5321 path limit)
    const MAX_LENGTH: usize = 254;
}

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> anyhow::Result<bool> {
        if email.is_empty() || email.len() > Self::MAX_LENGTH {
            return Ok(false);
        }

        if email.chars().any(char::is_whitespace) {
            return Ok(false);
        }

        let Some((local, domain)) = email.split_once('@') else {
            return Ok(false);
        };

        if local.is_empty() || domain.contains('@') {
            return Ok(false);
        }

        let labels: Vec<&str> = domain.split('.').collect();
        if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
            return Ok(false);
        }

        Ok(true)
    }
}
