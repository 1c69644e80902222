//! Demonstrates provisioning SMTP credentials through the host contract, with a mock Mailgun
//! server standing in for `api.mailgun.net`.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use url::Url;
// self
use mailgun_provisioner::{
	auth::CredentialSet,
	error::Error,
	mailgun::ReqwestMailgunProvisioner,
	provider::MailServiceProvider,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let domains_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v2/domains");
			then.status(200).header("content-type", "application/json").body(
				"{\"total_count\":1,\"items\":[{\"smtp_login\":\"postmaster@demo.example\",\
				 \"smtp_password\":\"demo-password\",\"name\":\"demo.example\"}]}",
			);
		})
		.await;
	let provider: Arc<dyn MailServiceProvider> = Arc::new(
		ReqwestMailgunProvisioner::new()?.with_endpoint(Url::parse(&server.url("/v2/domains"))?),
	);
	let descriptor = provider.descriptor();

	println!("Loaded `{}` provider offering `{}`.", descriptor.name, descriptor.service_type);

	let credentials = CredentialSet::new().with("apiKey", "key-demo");
	let smtp = provider.provision(&credentials).await?;

	println!("SMTP login {} for domain {}.", smtp.login, smtp.domain);

	match provider.provision(&CredentialSet::new()).await {
		Err(Error::Credentials(e)) => println!("Host contract violation: {e}"),
		other => println!("Unexpected outcome: {other:?}."),
	}

	domains_mock.assert_async().await;

	Ok(())
}
