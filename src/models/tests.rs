//! Message module tests

#[cfg(test)]
mod tests {
    use crate::models::ipam::{Ipam, IpamConfig};
    use crate::models::network::NetworkConfig;
    use std::hash::{DefaultHasher, Hash, Hasher};

    fn hash_of(config: &NetworkConfig) -> u64 {
        let mut hasher = DefaultHasher::new();
        config.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_fresh_builder_has_empty_options() {
        let config = NetworkConfig::builder().build();

        assert!(config.name().is_none());
        assert!(config.driver().is_none());
        assert!(config.ipam().is_none());
        assert!(config.options().is_empty());
        assert!(!config.check_duplicate());
    }

    #[test]
    fn test_empty_name_retains_previous_value() {
        let config = NetworkConfig::builder()
            .with_name("net1")
            .with_name("")
            .build();

        assert_eq!(config.name(), Some("net1"));
    }

    #[test]
    fn test_empty_driver_retains_previous_value() {
        let config = NetworkConfig::builder()
            .with_driver("bridge")
            .with_driver("")
            .build();

        assert_eq!(config.driver(), Some("bridge"));
    }

    #[test]
    fn test_option_overwrite_keeps_latest_value() {
        let config = NetworkConfig::builder()
            .add_option("k", "v1")
            .add_option("k", "v2")
            .build();

        assert_eq!(config.options().len(), 1);
        assert_eq!(config.options().get("k").map(String::as_str), Some("v2"));
    }

    #[test]
    fn test_empty_option_key_leaves_map_unchanged() {
        let config = NetworkConfig::builder()
            .add_option("k", "v")
            .add_option("", "ignored")
            .build();

        assert_eq!(config.options().len(), 1);
        assert_eq!(config.options().get("k").map(String::as_str), Some("v"));
    }

    #[test]
    fn test_option_value_stored_verbatim() {
        let config = NetworkConfig::builder().add_option("k", "").build();

        assert_eq!(config.options().get("k").map(String::as_str), Some(""));
    }

    #[test]
    fn test_equal_setter_sequences_produce_equal_values() {
        let first = NetworkConfig::builder()
            .with_name("mynet")
            .with_driver("bridge")
            .add_option("a", "1")
            .add_option("b", "2")
            .check_duplicate(true)
            .build();
        // Different order, same resulting state.
        let second = NetworkConfig::builder()
            .add_option("b", "2")
            .check_duplicate(true)
            .with_driver("overlay")
            .with_driver("bridge")
            .add_option("a", "1")
            .with_name("mynet")
            .build();

        assert_eq!(first, second);
        assert_eq!(hash_of(&first), hash_of(&second));
    }

    #[test]
    fn test_builds_are_independent_snapshots() {
        let builder = NetworkConfig::builder().with_name("net").add_option("a", "1");
        let first = builder.build();

        let builder = builder.add_option("b", "2");
        let second = builder.build();

        assert_eq!(first.options().len(), 1);
        assert_eq!(second.options().len(), 2);
        assert_ne!(first, second);
    }

    #[test]
    fn test_builder_without_name_still_builds() {
        let config = NetworkConfig::builder().with_driver("bridge").build();

        assert!(config.name().is_none());
        assert_eq!(config.driver(), Some("bridge"));
    }

    #[test]
    fn test_values_without_names_compare_equal() {
        let first = NetworkConfig::builder().with_driver("bridge").build();
        let second = NetworkConfig::builder().with_driver("bridge").build();

        assert_eq!(first, second);
        assert_eq!(hash_of(&first), hash_of(&second));
    }

    #[test]
    fn test_debug_representation_names_every_field() {
        let config = NetworkConfig::builder()
            .with_name("mynet")
            .check_duplicate(true)
            .build();
        let rendered = format!("{config:?}");

        for field in ["name", "driver", "ipam", "options", "check_duplicate"] {
            assert!(rendered.contains(field), "missing {field} in {rendered}");
        }
        assert!(rendered.contains("mynet"));
    }

    #[test]
    fn test_ipam_builder_collects_pools() {
        let ipam = Ipam::builder()
            .with_driver("default")
            .add_config(IpamConfig::create("10.0.0.0/24", "10.0.0.0/25", "10.0.0.1"))
            .add_config(IpamConfig::create("10.0.1.0/24", "", ""))
            .build();

        assert_eq!(ipam.driver(), Some("default"));
        assert_eq!(ipam.config().len(), 2);
        assert_eq!(ipam.config()[0].gateway(), Some("10.0.0.1"));
        assert!(ipam.config()[1].ip_range().is_none());
    }

    #[test]
    fn test_builder_trait_finalizes_accumulated_state() {
        use crate::utils::types::Builder;

        fn finish<B: Builder<T>, T>(builder: B) -> T {
            builder.build()
        }

        let config: NetworkConfig =
            finish(NetworkConfig::builder().with_name("net").check_duplicate(true));

        assert_eq!(config.name(), Some("net"));
        assert!(config.check_duplicate());
    }

    #[test]
    fn test_ipam_empty_driver_retains_previous_value() {
        let ipam = Ipam::builder().with_driver("default").with_driver("").build();

        assert_eq!(ipam.driver(), Some("default"));
    }
}
