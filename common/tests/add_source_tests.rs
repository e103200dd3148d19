use common::forms::{AddSourceForm, FormError};
use common::model::source::SourceType;

#[test]
fn network_source_body() {
    let mut form = AddSourceForm::new(SourceType::Network);
    form.name = "  lab network ".into();
    form.hosts = "10.0.0.1,10.0.0.2\n192.168.1.0/24".into();
    form.port = "2222".into();
    form.use_paramiko = true;
    form.toggle_credential(4);
    form.toggle_credential(2);

    let body = form.validate().unwrap();
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "source_type": "network",
            "credentials": [2, 4],
            "hosts": ["10.0.0.1", "10.0.0.2", "192.168.1.0/24"],
            "name": "lab network",
            "port": 2222,
            "options": {"use_paramiko": true}
        })
    );
}

#[test]
fn vcenter_source_uses_tls_options_and_omits_empty_port() {
    let mut form = AddSourceForm::new(SourceType::Vcenter);
    form.name = "vcenter".into();
    form.hosts = "vcenter.example.com".into();
    form.ssl_cert_verify = false;
    form.toggle_credential(2);

    let json = serde_json::to_value(form.validate().unwrap()).unwrap();
    assert_eq!(json.get("port"), None);
    assert_eq!(
        json["options"],
        serde_json::json!({"ssl_cert_verify": false, "ssl_protocol": "SSLv23", "disable_ssl": false})
    );
}

#[test]
fn reports_every_missing_field() {
    let mut form = AddSourceForm::new(SourceType::Satellite);
    form.port = "http".into();
    let errors = form.validate().unwrap_err();
    assert_eq!(
        errors,
        vec![
            FormError::MissingName,
            FormError::MissingHosts,
            FormError::InvalidPort("http".into()),
            FormError::MissingCredentials,
        ]
    );
    assert_eq!(
        errors.iter().map(FormError::field).collect::<Vec<_>>(),
        vec!["name", "hosts", "port", "credentials"]
    );
}

#[test]
fn toggling_a_credential_twice_removes_it() {
    let mut form = AddSourceForm::new(SourceType::Network);
    form.toggle_credential(1);
    form.toggle_credential(1);
    assert!(form.credentials.is_empty());
}
