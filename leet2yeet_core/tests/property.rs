use leet2yeet_core::error::ConvertError;
use leet2yeet_core::validate::validate_over;
use leet2yeet_core::{SourceParameters, convert, render};
use proptest::prelude::*;

prop_compose! {
    // Positive scales and sensitivity keep both caps oriented the same way and
    // the source output non-zero; speed cap stays off (it is not equivalent).
    fn convertible()(
        pre_scale in prop_oneof![1e-5f64..1e-4, 0.01f64..4.0],
        offset in prop_oneof![0.0f64..100.0, 1e4f64..1e5],
        sensitivity in prop_oneof![0.001f64..0.05, 0.05f64..5.0],
        acceleration in prop_oneof![Just(0.0f64), 1e-7f64..1e-4, 0.0f64..2.0],
        sens_cap in prop_oneof![Just(0.0f64), 0.1f64..20.0, 20.0f64..500.0],
        post_scale_x in 0.05f64..10.0,
        post_scale_y in 0.05f64..10.0,
    ) -> SourceParameters {
        SourceParameters {
            pre_scale_x: pre_scale,
            pre_scale_y: pre_scale,
            offset,
            speed_cap: 0.0,
            sensitivity,
            acceleration,
            sens_cap,
            post_scale_x,
            post_scale_y,
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn converted_curve_matches_source(src in convertible()) {
        let tgt = convert(&src).unwrap();
        // Full sweep is covered in tests/validate.rs; sample a spread here.
        for range in [1..=200u32, 4_900..=5_000, 9_900..=9_999] {
            let res = validate_over(&src, &tgt, range);
            prop_assert!(res.is_ok(), "{src:?} -> {tgt:?}: {res:?}");
        }
    }

    #[test]
    fn mismatched_prescale_always_refused(
        src in convertible(),
        dy in prop_oneof![-1.0f64..-1e-9, 1e-9f64..1.0],
    ) {
        let skewed = SourceParameters { pre_scale_y: src.pre_scale_x + dy, ..src };
        let is_refused = matches!(convert(&skewed), Err(ConvertError::IncompatiblePrescale { .. }));
        prop_assert!(is_refused);
    }

    #[test]
    fn rendered_values_reparse_within_four_digits(src in convertible()) {
        // Covers both the plain and the d.ddde±XX forms of %.4g.
        let tgt = convert(&src).unwrap();

        let text = render(&tgt).unwrap();
        let defines = leet2yeet_config::parse_defines(&text).unwrap();
        let keys = [
            ("sensitivity", tgt.sensitivity),
            ("sensitivity_y", tgt.sensitivity_y),
            ("output_cap", tgt.output_cap),
            ("input_cap", tgt.input_cap),
            ("offset", tgt.offset),
            ("prescale", tgt.pre_scale),
            ("acceleration", tgt.acceleration),
        ];
        for (key, want) in keys {
            let got = defines.get(key);
            prop_assert!(got.is_some(), "missing {key}");
            let got = got.unwrap_or_default();
            prop_assert!((got - want).abs() <= want.abs() * 5.0001e-4, "{key}: {got} vs {want}");
        }
        prop_assert_eq!(defines.get("use_smoothing"), Some(0.0));
    }
}
