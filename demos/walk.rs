use bizhi::{Client, ListRequest, Target};
use tokio_util::sync::CancellationToken;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::new();
    let cancel = CancellationToken::new();

    let mut req = ListRequest::builder()
        .target(Target::Anime)
        .end_num(2)
        .build();

    loop {
        let page = req.page_num;
        let keep_going = client
            .listing()
            .get_json(&mut req, &cancel, |envelope| {
                println!("[page {}] {} (code {})", page, envelope.msg, envelope.code);
                if let Some(result) = &envelope.result {
                    for record in &result.records {
                        println!("  {:10} group {:2} -> {}", record.url_name(), record.grouping(), record.file_name());
                    }
                }
                Ok(true)
            })
            .await?;

        if !keep_going || req.advance().is_none() {
            break;
        }
    }

    if let Some(state) = req.state() {
        println!("\n({} records total, {} per page, {} pages)", state.total, state.size, state.pages);
    }

    Ok(())
}
