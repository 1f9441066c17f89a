use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use proptest::prelude::*;
use wattbox_api::{AuthToken, Command, NetworkPath};

proptest! {
    #[test]
    fn auth_token_decodes_to_credentials(
        username in "[^:]{0,24}",
        password in ".{0,24}",
    ) {
        let token = AuthToken::new(&username, &password);
        let encoded = token
            .as_str()
            .strip_prefix("Basic ")
            .expect("token carries the Basic scheme");

        let decoded = STANDARD.decode(encoded).unwrap();
        prop_assert_eq!(decoded, format!("{}:{}", username, password).into_bytes());
    }

    #[test]
    fn command_url_has_one_outlet_and_one_command(
        outlet in any::<i32>(),
        command in prop::sample::select(Command::ALL.to_vec()),
    ) {
        let path = NetworkPath::normalize("192.168.1.20/");
        let url = path.command_url(outlet, command);

        prop_assert!(url.starts_with("http://192.168.1.20/control.cgi?"));
        prop_assert_eq!(url.matches("outlet=").count(), 1);
        prop_assert_eq!(url.matches("command=").count(), 1);

        let query = url.split_once('?').map(|(_, q)| q).unwrap();
        let expected = format!("outlet={}&command={}", outlet, command.code());
        prop_assert_eq!(query, expected.as_str());
    }

    #[test]
    fn bare_address_with_trailing_slash_gets_http_scheme(
        host in "[a-z0-9]{1,12}(\\.[a-z0-9]{1,12}){0,3}(:[0-9]{1,5})?",
    ) {
        let path = NetworkPath::normalize(&format!("{}/", host));

        prop_assert!(path.as_str().starts_with("http://"));
        prop_assert!(!path.as_str().ends_with('/'));
        prop_assert_eq!(path.host(), Some(host.as_str()));
    }
}
