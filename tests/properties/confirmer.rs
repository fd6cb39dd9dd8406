//! Property tests for confirmation answers.

use std::io::Cursor;

use proptest::prelude::*;

use reposweep::domain::ports::{is_affirmative, Confirmer};
use reposweep::infrastructure::LineConfirmer;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: only a lone `y` or `Y` confirms.
    #[test]
    fn property_only_y_confirms(answer in "(?s).{0,16}") {
        let expected = answer.trim() == "y" || answer.trim() == "Y";
        prop_assert_eq!(is_affirmative(&answer), expected);
    }

    /// PROPERTY: the line confirmer reads exactly the first line.
    #[test]
    fn property_line_confirmer_reads_first_line(
        first in "[^\n]{0,8}",
        rest in "(?s).{0,16}",
    ) {
        let input = format!("{}\n{}", first, rest);
        let confirmer = LineConfirmer::new(Cursor::new(input.into_bytes()));

        prop_assert_eq!(confirmer.ask("Proceed? [y/N]"), is_affirmative(&first));
    }
}
