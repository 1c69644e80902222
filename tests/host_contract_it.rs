// crates.io
use httpmock::prelude::*;
// self
use mailgun_provisioner::{
	_preludet::*,
	auth::CredentialSet,
	error::{CredentialError, Error},
	mailgun::mailgun_descriptor,
	provider::{
		DescriptorError, MailServiceProvider, ParameterSpec, ServiceDescriptor, ServiceType,
	},
};

#[test]
fn mailgun_descriptor_matches_host_shape() {
	let descriptor = mailgun_descriptor().expect("Built-in descriptor should validate.");
	let json = serde_json::to_value(&descriptor).expect("Descriptor should serialize.");

	assert_eq!(json["name"], "mailgun");
	assert_eq!(json["type"], "mail");
	assert_eq!(json["description"], env!("CARGO_PKG_DESCRIPTION"));
	assert_eq!(
		json["parameters"]["credentials"],
		serde_json::json!([{ "name": "apiKey", "required": true }])
	);

	let round_trip: ServiceDescriptor =
		serde_json::from_value(json).expect("Descriptor should deserialize.");

	assert_eq!(round_trip, descriptor);
}

#[test]
fn descriptor_builder_validates_parameter_names() {
	let err = ServiceDescriptor::builder("with space", ServiceType::Mail)
		.build()
		.expect_err("Whitespace in provider names should be rejected.");

	assert!(matches!(err, DescriptorError::InvalidName { .. }));

	let err = ServiceDescriptor::builder("sendgrid", ServiceType::Mail)
		.credential(ParameterSpec::required(""))
		.build()
		.expect_err("Empty parameter names should be rejected.");

	assert!(matches!(err, DescriptorError::InvalidParameterName { .. }));

	let err = ServiceDescriptor::builder("sendgrid", ServiceType::Mail)
		.credentials([ParameterSpec::required("apiKey"), ParameterSpec::optional("apiKey")])
		.build()
		.expect_err("Duplicate parameters should be rejected.");

	assert_eq!(err, DescriptorError::DuplicateParameter { name: "apiKey".into() });

	let descriptor = ServiceDescriptor::builder("sendgrid", ServiceType::Mail)
		.description("Another mail provider.")
		.credential(ParameterSpec::required("apiKey"))
		.credential(ParameterSpec::optional("subuser"))
		.build()
		.expect("Well-formed descriptors should build.");

	assert!(descriptor.provides(ServiceType::Mail));
	assert_eq!(descriptor.parameters.credentials.len(), 2);
}

#[tokio::test]
async fn host_provisions_through_shared_trait_object() {
	let server = MockServer::start_async().await;
	let provider: Arc<dyn MailServiceProvider> =
		Arc::new(build_reqwest_test_provisioner(&server.url(MOCK_DOMAINS_PATH), None));
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path(MOCK_DOMAINS_PATH).header("authorization", basic_header(API_KEY));
			then.status(200).header("content-type", "application/json").body(
				"{\"items\":[{\"smtp_login\":\"tester@example.mailgun.org\",\
				 \"name\":\"example.mailgun.org\",\"smtp_password\":\"testy\"}]}",
			);
		})
		.await;

	assert_eq!(provider.descriptor().service_type, ServiceType::Mail);

	let credentials = CredentialSet::new().with("apiKey", API_KEY);
	let credential =
		provider.provision(&credentials).await.expect("Host provisioning should succeed.");

	assert_eq!(credential.login, "tester@example.mailgun.org");
	assert_eq!(credential.password, "testy");
	assert_eq!(credential.domain, "example.mailgun.org");

	mock.assert_async().await;
}

#[tokio::test]
async fn host_contract_violations_never_reach_the_provider() {
	let server = MockServer::start_async().await;
	let provider: Arc<dyn MailServiceProvider> =
		Arc::new(build_reqwest_test_provisioner(&server.url(MOCK_DOMAINS_PATH), None));
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path(MOCK_DOMAINS_PATH);
			then.status(200);
		})
		.await;
	let missing = provider
		.provision(&CredentialSet::new())
		.await
		.expect_err("Missing keys should be rejected.");
	let empty_set = CredentialSet::new().with("apiKey", "");
	let empty =
		provider.provision(&empty_set).await.expect_err("Empty keys should be rejected.");

	assert!(matches!(missing, Error::Credentials(CredentialError::Missing { .. })));
	assert!(matches!(empty, Error::Credentials(CredentialError::Empty { .. })));

	mock.assert_calls_async(0).await;
}
