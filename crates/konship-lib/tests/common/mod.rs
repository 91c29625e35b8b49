#![allow(dead_code)]

use std::sync::Arc;

use konship_lib::{
    ContainerKind, ContainerSpec, Dimensions, RecordingNotifier, Registry, RegistryConfig,
};

pub fn standard_dimensions() -> Dimensions {
    Dimensions::new(200.0, 100.0, 200.0)
}

pub fn liquid(hazardous: bool) -> ContainerSpec {
    ContainerSpec::new(
        ContainerKind::Liquid { hazardous },
        standard_dimensions(),
        1000.0,
    )
}

pub fn gas() -> ContainerSpec {
    ContainerSpec::new(
        ContainerKind::Gas { pressure: 2.5 },
        standard_dimensions(),
        1000.0,
    )
}

pub fn refrigerated() -> ContainerSpec {
    ContainerSpec::new(
        ContainerKind::Refrigerated {
            product_type: "Bananas".to_string(),
            temperature: 13.3,
        },
        standard_dimensions(),
        1000.0,
    )
}

/// Registry wired to a shared recording notifier.
pub fn recording_registry(config: RegistryConfig) -> (Registry, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::new());
    let registry = Registry::new(config).with_notifier(Arc::clone(&notifier));
    (registry, notifier)
}
