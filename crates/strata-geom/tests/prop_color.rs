use proptest::prelude::*;
use strata_geom::Rgb;

fn arb_rgb() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

proptest! {
    // darker never brightens a channel as the factor grows
    #[test]
    fn darker_is_monotonic_in_factor(c in arb_rgb(), k1 in 0.0f32..4.0, dk in 0.0f32..4.0) {
        let a = c.darker(k1);
        let b = c.darker(k1 + dk);
        prop_assert!(b.r <= a.r);
        prop_assert!(b.g <= a.g);
        prop_assert!(b.b <= a.b);
    }

    // same inputs, same output
    #[test]
    fn darker_is_deterministic(c in arb_rgb(), k in 0.0f32..4.0) {
        prop_assert_eq!(c.darker(k), c.darker(k));
    }

    // to_hex output always parses back to the same color
    #[test]
    fn hex_parse_inverts_to_hex(c in arb_rgb()) {
        let parsed: Rgb = c.to_hex().parse().unwrap();
        prop_assert_eq!(parsed, c);
    }
}
