#[cfg(test)]
mod address_regression_tests {
    use std::collections::HashSet;

    use ipv6kit::address::{self, AddressError, ErrorKind, Ipv6Prefix};
    use ipv6kit::batch::{self, Outcome};
    use ipv6kit::report;

    /// Documented expansions
    #[test]
    fn test_documented_expansions() {
        let cases = vec![
            ("::1", "0000:0000:0000:0000:0000:0000:0000:0001"),
            ("2001:db8::1", "2001:0db8:0000:0000:0000:0000:0000:0001"),
            ("::", "0000:0000:0000:0000:0000:0000:0000:0000"),
            ("2001:db8::", "2001:0db8:0000:0000:0000:0000:0000:0000"),
            ("FE80::0202:B3FF:FE1E:8329", "fe80:0000:0000:0000:0202:b3ff:fe1e:8329"),
        ];

        for (input, expected) in cases {
            let canonical = address::expand(input).unwrap();
            assert_eq!(canonical.to_string(), expected, "expanding {}", input);
        }
    }

    /// Every legal spelling of one address expands to the same canonical form
    #[test]
    fn test_compressed_renderings_round_trip() {
        let full = "0000:0000:0001:0000:0000:0000:0000:0000";
        let spellings = vec![
            "0:0:1:0:0:0:0:0",
            "0:0:1::",
            "::1:0:0:0:0:0",
            "0:0:1:0::0",
            "0:0:1::0:0:0",
            "0000:0000:0001:0000:0000:0000:0000:0000",
        ];

        let expected = address::expand(full).unwrap();
        assert_eq!(expected.to_string(), full);
        for spelling in spellings {
            assert_eq!(address::expand(spelling).unwrap(), expected, "{}", spelling);
        }

        assert_eq!(address::expand(&expected.to_compressed()).unwrap(), expected);
    }

    /// Expanding canonical output again changes nothing
    #[test]
    fn test_expand_is_idempotent() {
        for input in ["2001:db8::1", "::", "1::", "a:b:c:d:e:f:1:2"] {
            let once = address::expand(input).unwrap().to_string();
            let twice = address::expand(&once).unwrap().to_string();
            assert_eq!(once, twice);
        }
    }

    /// Bad items are reported without aborting the batch
    #[test]
    fn test_invalid_items_do_not_abort_batch() {
        let inputs = vec!["not-an-address", "::1", "2001:db8:::1", "2001:db8::2"];
        let report = batch::expand_batch(&inputs);

        assert_eq!(report.total(), 4);
        assert_eq!(report.succeeded(), 2);

        let rejected: Vec<&str> = report.failures().map(|f| f.input.as_str()).collect();
        assert_eq!(rejected, vec!["not-an-address", "2001:db8:::1"]);
        assert!(report.failures().all(|f| f.kind == ErrorKind::InvalidAddressFormat));

        assert!(matches!(report.items[0], Outcome::Error(_)));
        assert!(matches!(report.items[1], Outcome::Ok(_)));
    }

    /// Generated addresses share the prefix and differ in their identifiers
    #[test]
    fn test_generate_five_under_documentation_prefix() {
        let addresses = address::generate_addresses("2001:db8:a:b::", 5).unwrap();
        assert_eq!(addresses.len(), 5);

        let unique: HashSet<&String> = addresses.iter().collect();
        assert_eq!(unique.len(), 5);

        for generated in &addresses {
            assert!(generated.starts_with("2001:db8:a:b:"));
            assert!(address::is_valid_ipv6(generated), "{} should be valid", generated);
        }
    }

    #[test]
    fn test_generate_default_prefix() {
        let prefix = Ipv6Prefix::default();
        let addresses = address::generate(&prefix, 1);
        assert_eq!(addresses.len(), 1);
        assert!(addresses[0].starts_with(address::DEFAULT_PREFIX));
    }

    #[test]
    fn test_prefix_errors() {
        match address::generate_addresses("2001:db8::1", 1) {
            Err(AddressError::InvalidPrefixFormat { input, .. }) => assert_eq!(input, "2001:db8::1"),
            other => panic!("expected InvalidPrefixFormat, got {:?}", other),
        }
    }

    /// Both branches of the zero-run collapse
    #[test]
    fn test_ipv4_hex_conversion() {
        // 0 octet produces an internal zero run in the first group
        assert_eq!(address::convert("192.0.2.1").unwrap().hex, "c0:21");
        // no zero digits at all
        assert_eq!(address::convert("10.1.1.1").unwrap().hex, "a1:11");
        // leading zero run after the colon is dropped
        assert_eq!(address::convert("172.16.0.1").unwrap().hex, "ac10:1");

        let report = batch::convert_batch(&["192.0.2.1", "999.1.1.1"]);
        assert_eq!(report.succeeded(), 1);
        assert_eq!(report.failed(), 1);
    }

    #[test]
    fn test_json_report_shape() {
        let report = batch::expand_batch(&["::1", "bad"]);
        let json = report::render_json(&report, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["metadata"]["operation"], "expand");
        assert_eq!(value["items"][0]["input"], "::1");
        assert_eq!(value["items"][0]["canonical"], "0000:0000:0000:0000:0000:0000:0000:0001");
        assert_eq!(value["items"][1]["kind"], "InvalidAddressFormat");
    }
}
