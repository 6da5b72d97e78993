use teamsfit_api::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("teamsfit error: {err}");
        std::process::exit(1);
    }
}
