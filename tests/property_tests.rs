use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use img_shrink::{basic_auth_header, ResizeBody, UploadInput};
use proptest::prelude::*;

proptest! {
    #[test]
    fn strings_starting_with_http_become_remote_urls(rest in "\\PC*") {
        let arg = format!("http{rest}");
        let input = UploadInput::from_arg(&arg).unwrap();
        prop_assert!(matches!(input, UploadInput::RemoteUrl(url) if url == arg));
    }

    #[test]
    fn other_strings_become_local_paths(arg in "\\PC+") {
        prop_assume!(!arg.starts_with("http"));
        let input = UploadInput::from_arg(&arg).unwrap();
        prop_assert!(matches!(input, UploadInput::LocalPath(_)));
    }

    #[test]
    fn auth_header_roundtrips_through_base64(key in "[a-zA-Z0-9]{1,64}") {
        let header = basic_auth_header(&key);
        let encoded = header.strip_prefix("Basic ").unwrap();
        let decoded = STANDARD.decode(encoded).unwrap();
        prop_assert_eq!(decoded, format!("api:{key}").into_bytes());
    }

    #[test]
    fn resize_body_serializes_only_given_dimensions(
        width in proptest::option::of(1u32..10_000),
        height in proptest::option::of(1u32..10_000),
    ) {
        let body = ResizeBody::new("scale", width, height);
        let value = serde_json::to_value(&body).unwrap();
        let resize = &value["resize"];
        prop_assert_eq!(resize["method"].as_str(), Some("scale"));
        prop_assert_eq!(resize["width"].as_u64(), width.map(u64::from));
        prop_assert_eq!(resize["height"].as_u64(), height.map(u64::from));
    }
}
