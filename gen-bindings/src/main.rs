use postcard_bindgen::{generate_bindings, javascript, PackageInfo};

fn main() {
    javascript::build_package(
        std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .unwrap()
            .join("bindings")
            .as_path(),
        PackageInfo {
            name: "@neo/colors".into(),
            version: "0.1.0".try_into().unwrap(),
        },
        javascript::GenerationSettings::enable_all(),
        generate_bindings!(libneo::NeoColor, libneo::ColorOrder, libneo::StripConfig),
    )
    .unwrap();
}
