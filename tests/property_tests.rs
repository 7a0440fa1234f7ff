//! Property-based tests for chainlog using proptest

use chainlog::prelude::*;
use proptest::prelude::*;

fn any_severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::ALL.to_vec())
}

// ============================================================================
// Severity Tests
// ============================================================================

proptest! {
    /// Test that Severity string conversions roundtrip correctly
    #[test]
    fn test_severity_str_roundtrip(severity in any_severity()) {
        let parsed: Severity = severity.to_str().parse().unwrap();
        prop_assert_eq!(severity, parsed);
    }

    /// Test that Severity ordering follows the numeric rank
    #[test]
    fn test_severity_ordering(s1 in any_severity(), s2 in any_severity()) {
        prop_assert_eq!(s1 <= s2, s1.rank() <= s2.rank());
        prop_assert_eq!(s1 < s2, s1.rank() < s2.rank());
    }

    /// Test that parsing accepts case-insensitive input
    #[test]
    fn test_severity_case_insensitive(severity in any_severity(), upper in any::<bool>()) {
        let input = if upper {
            severity.to_str().to_uppercase()
        } else {
            severity.to_str().to_string()
        };
        prop_assert_eq!(input.parse::<Severity>(), Ok(severity));
    }
}

// ============================================================================
// Chain Traversal Tests
// ============================================================================

proptest! {
    /// A link writes a message iff its severity is at least as severe as the threshold
    #[test]
    fn test_threshold_law(
        threshold in any_severity(),
        severity in any_severity(),
        propagate in any::<bool>(),
    ) {
        let records = BufferSink::new();
        let mut chain = OutputChain::new().link(records.clone(), threshold, propagate);

        chain.deliver(severity, "message").unwrap();

        prop_assert_eq!(records.len() == 1, severity <= threshold);
    }

    /// Traversal continues iff the message did not pass or the link propagates
    #[test]
    fn test_propagation_law(
        threshold in any_severity(),
        severity in any_severity(),
        propagate in any::<bool>(),
    ) {
        let first = BufferSink::new();
        let second = BufferSink::new();
        let mut chain = OutputChain::new()
            .link(first.clone(), threshold, propagate)
            .link(second.clone(), Severity::Debug, true);

        chain.deliver(severity, "message").unwrap();

        let passed = severity <= threshold;
        prop_assert_eq!(second.len() == 1, !passed || propagate);
    }

    /// Across a chain of links, every link that sees a passing message writes it,
    /// and the message reaches link i iff no earlier link absorbed it
    #[test]
    fn test_chain_reach(
        links in prop::collection::vec((any_severity(), any::<bool>()), 1..6),
        severity in any_severity(),
    ) {
        let buffers: Vec<BufferSink> = links.iter().map(|_| BufferSink::new()).collect();
        let mut chain = OutputChain::new();
        for (buffer, (threshold, propagate)) in buffers.iter().zip(links.iter()) {
            chain.push(Link::new(buffer.clone(), *threshold, *propagate));
        }

        chain.deliver(severity, "message").unwrap();

        let mut reached = true;
        for (buffer, (threshold, propagate)) in buffers.iter().zip(links.iter()) {
            let passed = severity <= *threshold;
            prop_assert_eq!(buffer.len() == 1, reached && passed);
            if reached && passed && !propagate {
                reached = false;
            }
        }
    }
}

// ============================================================================
// Message Assembly Tests
// ============================================================================

proptest! {
    /// Exactly one record per non-empty message, holding the concatenated fragments
    #[test]
    fn test_single_submission(
        fragments in prop::collection::vec("[a-z0-9 ]{0,8}", 0..10),
        severity in any_severity(),
    ) {
        let records = BufferSink::new();
        let logger = Logger::with_chain(OutputChain::new().link(records.clone(), Severity::Debug, true));

        let mut builder = logger.message(severity);
        for fragment in &fragments {
            builder.push_str(fragment);
        }
        drop(builder);

        let joined: String = fragments.concat();
        if joined.is_empty() {
            prop_assert!(records.is_empty());
        } else {
            prop_assert_eq!(records.records(), vec![(severity, joined)]);
        }
    }

    /// Bytes always render as their decimal value
    #[test]
    fn test_byte_stringify(byte in any::<u8>()) {
        prop_assert_eq!(stringify(&byte), format!("{}", byte as u32));
    }
}
