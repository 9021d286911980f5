//! Sends a templated message through the vendor configured in the
//! environment (`USEND_VENDOR_URL`, `USEND_VENDOR_API_KEY`).
use usend_client::{ListUnsubscribe, SendEmailOptions, Usend, UsendOptions, replace_html};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let usend = Usend::new(UsendOptions {
        dkim_private_key: std::env::var("USEND_DKIM_PRIVATE_KEY").ok(),
        ..Default::default()
    })?;

    let html = replace_html(
        "<p>Hello {{name}}, your order {{order}} has shipped.</p>",
        [("{{name}}", "Ada"), ("{{order}}", "#1042")],
    );

    let response = usend
        .send_email(
            SendEmailOptions::builder()
                .from("noreply@example.com")
                .to(vec!["ada@example.com"])
                .subject("Your order has shipped")
                .html(html)
                .unsubscribe(ListUnsubscribe::Targets {
                    email: Some("unsubscribe@example.com".to_string()),
                    url: Some("https://example.com/unsubscribe".to_string()),
                })
                .build(),
        )
        .await?;

    println!("vendor accepted message: {} {}", response.status, response.data);
    Ok(())
}
