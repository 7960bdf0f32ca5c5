//! Stateless voucher verification.

use crate::domain::SigningDomain;
use crate::error::VoucherError;
use crate::voucher::{voucher_hash, AdmissionVoucher};
use satchel_crypto::verify_signature;
use satchel_types::{OwnerAddress, PublicKey, RarityTier, StakedAsset};
use std::collections::HashSet;

/// The parsed, signature-checked content of a voucher.
///
/// Downstream code works from this instead of re-parsing attested fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifiedAdmission {
    pub owner: OwnerAddress,
    pub primary: StakedAsset,
    pub secondaries: Vec<StakedAsset>,
}

/// Verify a voucher against the caller's identity and the active signer.
///
/// Recomputes the domain-separated hash over the voucher's fields, checks
/// the signature against `signer`, requires the attested owner to equal
/// `caller`, parses the string-encoded rarities, and rejects duplicate
/// secondary tokens. Pure pass/fail; no side effects, so duplicate
/// verification across a retried call is safe. Custody availability of the
/// referenced assets is the registry's concern, checked at lock time.
pub fn verify(
    voucher: &AdmissionVoucher,
    caller: &OwnerAddress,
    signer: &PublicKey,
    domain: &SigningDomain,
) -> Result<VerifiedAdmission, VoucherError> {
    if &voucher.owner != caller {
        return Err(VoucherError::CallerMismatch {
            expected: voucher.owner.to_string(),
            actual: caller.to_string(),
        });
    }
    if voucher.secondary_tokens.len() != voucher.secondary_rarities.len() {
        return Err(VoucherError::LengthMismatch {
            tokens: voucher.secondary_tokens.len(),
            rarities: voucher.secondary_rarities.len(),
        });
    }

    let hash = voucher_hash(
        domain,
        &voucher.owner,
        voucher.primary_token,
        &voucher.rarity_multiplier,
        &voucher.secondary_tokens,
        &voucher.secondary_rarities,
    );
    if !verify_signature(&hash, &voucher.signature, signer) {
        return Err(VoucherError::BadSignature);
    }

    let primary_rarity: RarityTier = voucher
        .rarity_multiplier
        .parse()
        .map_err(|_| VoucherError::MalformedRarity(voucher.rarity_multiplier.clone()))?;

    let mut seen = HashSet::new();
    let mut secondaries = Vec::with_capacity(voucher.secondary_tokens.len());
    for (token, raw_rarity) in voucher
        .secondary_tokens
        .iter()
        .zip(&voucher.secondary_rarities)
    {
        if !seen.insert(*token) {
            return Err(VoucherError::DuplicateToken(*token));
        }
        let rarity: RarityTier = raw_rarity
            .parse()
            .map_err(|_| VoucherError::MalformedRarity(raw_rarity.clone()))?;
        secondaries.push(StakedAsset::new(*token, rarity));
    }

    Ok(VerifiedAdmission {
        owner: voucher.owner.clone(),
        primary: StakedAsset::new(voucher.primary_token, primary_rarity),
        secondaries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voucher::issue;
    use satchel_crypto::keypair_from_seed;
    use satchel_types::{KeyPair, NetworkId};

    fn signer() -> KeyPair {
        keypair_from_seed(&[7u8; 32])
    }

    fn domain() -> SigningDomain {
        SigningDomain::new("registry-main", NetworkId::Test)
    }

    fn owner() -> OwnerAddress {
        OwnerAddress::new("sat_holder1")
    }

    fn sample_voucher() -> AdmissionVoucher {
        issue(
            &domain(),
            &signer().private,
            owner(),
            10,
            "1",
            vec![1, 2, 3],
            vec!["1".into(), "2".into(), "3".into()],
        )
    }

    #[test]
    fn valid_voucher_verifies_and_parses() {
        let admission = verify(&sample_voucher(), &owner(), &signer().public, &domain()).unwrap();
        assert_eq!(admission.primary, StakedAsset::new(10, RarityTier::new(1)));
        assert_eq!(admission.secondaries.len(), 3);
        assert_eq!(
            admission.secondaries[2],
            StakedAsset::new(3, RarityTier::new(3))
        );
    }

    #[test]
    fn verification_is_repeatable() {
        let voucher = sample_voucher();
        let first = verify(&voucher, &owner(), &signer().public, &domain()).unwrap();
        let second = verify(&voucher, &owner(), &signer().public, &domain()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn wrong_signer_is_rejected() {
        let other = keypair_from_seed(&[8u8; 32]);
        let err = verify(&sample_voucher(), &owner(), &other.public, &domain()).unwrap_err();
        assert_eq!(err, VoucherError::BadSignature);
    }

    #[test]
    fn tampered_fields_are_rejected() {
        let mut voucher = sample_voucher();
        voucher.primary_token = 11;
        assert_eq!(
            verify(&voucher, &owner(), &signer().public, &domain()).unwrap_err(),
            VoucherError::BadSignature
        );

        let mut voucher = sample_voucher();
        voucher.secondary_tokens[0] = 99;
        assert_eq!(
            verify(&voucher, &owner(), &signer().public, &domain()).unwrap_err(),
            VoucherError::BadSignature
        );

        let mut voucher = sample_voucher();
        voucher.rarity_multiplier = "3".into();
        assert_eq!(
            verify(&voucher, &owner(), &signer().public, &domain()).unwrap_err(),
            VoucherError::BadSignature
        );
    }

    #[test]
    fn caller_mismatch_is_rejected() {
        let stranger = OwnerAddress::new("sat_stranger");
        let err = verify(&sample_voucher(), &stranger, &signer().public, &domain()).unwrap_err();
        assert!(matches!(err, VoucherError::CallerMismatch { .. }));
    }

    #[test]
    fn cross_deployment_replay_is_rejected() {
        let other_network = SigningDomain::new("registry-main", NetworkId::Main);
        assert_eq!(
            verify(&sample_voucher(), &owner(), &signer().public, &other_network).unwrap_err(),
            VoucherError::BadSignature
        );

        let other_instance = SigningDomain::new("registry-other", NetworkId::Test);
        assert_eq!(
            verify(&sample_voucher(), &owner(), &signer().public, &other_instance).unwrap_err(),
            VoucherError::BadSignature
        );
    }

    #[test]
    fn parallel_list_length_mismatch_is_rejected() {
        let mut voucher = sample_voucher();
        voucher.secondary_rarities.pop();
        assert!(matches!(
            verify(&voucher, &owner(), &signer().public, &domain()).unwrap_err(),
            VoucherError::LengthMismatch { .. }
        ));
    }

    #[test]
    fn duplicate_secondary_token_is_rejected() {
        let voucher = issue(
            &domain(),
            &signer().private,
            owner(),
            10,
            "1",
            vec![4, 4],
            vec!["1".into(), "1".into()],
        );
        assert_eq!(
            verify(&voucher, &owner(), &signer().public, &domain()).unwrap_err(),
            VoucherError::DuplicateToken(4)
        );
    }

    #[test]
    fn malformed_rarity_is_rejected() {
        let voucher = issue(
            &domain(),
            &signer().private,
            owner(),
            10,
            "legendary",
            vec![],
            vec![],
        );
        assert!(matches!(
            verify(&voucher, &owner(), &signer().public, &domain()).unwrap_err(),
            VoucherError::MalformedRarity(_)
        ));
    }

    #[test]
    fn json_wire_roundtrip_preserves_signature() {
        let voucher = sample_voucher();
        let decoded = AdmissionVoucher::from_json(&voucher.to_json()).unwrap();
        assert!(verify(&decoded, &owner(), &signer().public, &domain()).is_ok());
    }
}
