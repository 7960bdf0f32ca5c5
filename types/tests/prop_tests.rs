use proptest::prelude::*;

use satchel_types::{AssetId, RarityTier, RewardAmount, Timestamp};

proptest! {
    /// RewardAmount roundtrip: new -> raw produces the same value.
    #[test]
    fn amount_raw_roundtrip(raw in any::<u128>()) {
        let amount = RewardAmount::new(raw);
        prop_assert_eq!(amount.raw(), raw);
    }

    /// checked_add agrees with u128 overflow semantics.
    #[test]
    fn amount_checked_add_matches_u128(a in any::<u128>(), b in any::<u128>()) {
        let sum = RewardAmount::new(a).checked_add(RewardAmount::new(b));
        prop_assert_eq!(sum.map(|s| s.raw()), a.checked_add(b));
    }

    /// saturating_sub never underflows and agrees with u128.
    #[test]
    fn amount_saturating_sub_matches_u128(a in any::<u128>(), b in any::<u128>()) {
        let diff = RewardAmount::new(a).saturating_sub(RewardAmount::new(b));
        prop_assert_eq!(diff.raw(), a.saturating_sub(b));
    }

    /// RewardAmount bincode serialization roundtrip.
    #[test]
    fn amount_bincode_roundtrip(raw in any::<u128>()) {
        let amount = RewardAmount::new(raw);
        let encoded = bincode::serialize(&amount).unwrap();
        let decoded: RewardAmount = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, amount);
    }

    /// Timestamp ordering: new(a) <= new(b) iff a <= b.
    #[test]
    fn timestamp_ordering(a in any::<u64>(), b in any::<u64>()) {
        let ta = Timestamp::new(a);
        let tb = Timestamp::new(b);
        prop_assert_eq!(ta <= tb, a <= b);
        prop_assert_eq!(ta == tb, a == b);
    }

    /// elapsed_since saturates instead of underflowing.
    #[test]
    fn timestamp_elapsed_saturates(a in any::<u64>(), b in any::<u64>()) {
        let elapsed = Timestamp::new(a).elapsed_since(Timestamp::new(b));
        prop_assert_eq!(elapsed, b.saturating_sub(a));
    }

    /// Rarity tier display/parse roundtrip.
    #[test]
    fn rarity_display_parse_roundtrip(tier in any::<u8>()) {
        let rarity = RarityTier::new(tier);
        prop_assert_eq!(rarity.to_string().parse::<RarityTier>().unwrap(), rarity);
    }

    /// Asset identity includes the collection: same token, different tier,
    /// different asset.
    #[test]
    fn asset_identity_includes_tier(token in any::<u64>()) {
        prop_assert_ne!(AssetId::primary(token), AssetId::secondary(token));
    }
}
