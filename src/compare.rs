use crate::error::CheckError;
use crate::models::{Precondition, Verdict};

/// Compare a computed digest against the operator's reference.
///
/// Surrounding whitespace on the reference is ignored; whitespace inside it
/// is not, so a reference with an embedded space never matches.
pub fn compare(computed: &str, reference: &str) -> Result<Verdict, CheckError> {
    if computed.is_empty() {
        return Err(CheckError::Precondition(Precondition::NoFile));
    }
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(CheckError::Precondition(Precondition::NoReference));
    }
    if computed.eq_ignore_ascii_case(reference) {
        Ok(Verdict::Match)
    } else {
        Ok(Verdict::Mismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    #[test]
    fn case_is_ignored() {
        let upper = ABC_SHA256.to_ascii_uppercase();
        assert_eq!(compare(ABC_SHA256, &upper).unwrap(), Verdict::Match);
        assert_eq!(compare(&upper, ABC_SHA256).unwrap(), Verdict::Match);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let padded = format!("  {ABC_SHA256}\n");
        assert_eq!(compare(ABC_SHA256, &padded).unwrap(), Verdict::Match);
    }

    #[test]
    fn embedded_whitespace_is_a_mismatch() {
        let split = format!("{} {}", &ABC_SHA256[..32], &ABC_SHA256[32..]);
        assert_eq!(compare(ABC_SHA256, &split).unwrap(), Verdict::Mismatch);
    }

    #[test]
    fn different_digest_is_a_mismatch() {
        assert_eq!(
            compare(ABC_SHA256, "d41d8cd98f00b204e9800998ecf8427e").unwrap(),
            Verdict::Mismatch
        );
    }

    #[test]
    fn empty_inputs_are_preconditions() {
        assert!(matches!(
            compare(ABC_SHA256, "   "),
            Err(CheckError::Precondition(Precondition::NoReference))
        ));
        assert!(matches!(
            compare("", ABC_SHA256),
            Err(CheckError::Precondition(Precondition::NoFile))
        ));
    }
}
