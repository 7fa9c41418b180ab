use validator::ValidateEmail;

/// Student email
#[derive(Debug)]
pub struct StudentEmail(String);

impl StudentEmail {
    /// Parse student email
    pub fn parse(email: String) -> Result<Self, String> {
        if ValidateEmail::validate_email(&email) {
            Ok(Self(email))
        } else {
            Err(format!("{email} is not a valid student email"))
        }
    }
}

impl AsRef<str> for StudentEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
