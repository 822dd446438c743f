use rand::{distr::Alphanumeric, Rng};

/// Length of remember-me tokens stored on a principal
pub const REMEMBER_TOKEN_LENGTH: usize = 60;
/// Length of email verification tokens
pub const VERIFICATION_TOKEN_LENGTH: usize = 64;
/// Length of generated file names on the public disk
pub const FILE_NAME_LENGTH: usize = 40;

/// Random alphanumeric string of `len` characters from the thread-local CSPRNG
pub fn random_string(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
