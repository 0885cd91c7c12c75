use std::sync::Arc;
use serde::Serialize;
use tracing::{info, warn};
use lending_library::catalog::command::add_item_cmd::{AddItemCommand, AddItemCommandRequest};
use lending_library::checkout::command::checkout_item_cmd::{CheckoutItemCommand, CheckoutItemCommandRequest};
use lending_library::checkout::command::return_item_cmd::{ReturnItemCommand, ReturnItemCommandRequest};
use lending_library::core::command::{Command, CommandError};
use lending_library::core::domain::Configuration;
use lending_library::gateway::GatewayPublisherVia;
use lending_library::hold::command::request_item_cmd::{RequestItemCommand, RequestItemCommandRequest};
use lending_library::items::domain::model::ItemKind;
use lending_library::library::command::advance_day_cmd::{AdvanceDayCommand, AdvanceDayCommandRequest};
use lending_library::library::domain::LibraryService;
use lending_library::library::factory::create_library_service;
use lending_library::patrons::command::add_patron_cmd::{AddPatronCommand, AddPatronCommandRequest};
use lending_library::patrons::command::get_patron_cmd::{GetPatronCommand, GetPatronCommandRequest};
use lending_library::patrons::command::pay_fine_cmd::{PayFineCommand, PayFineCommandRequest};
use lending_library::utils::logging::setup_tracing;

fn report<T: Serialize>(step: &str, res: Result<T, CommandError>) {
    match res {
        Ok(value) => match serde_json::to_string(&value) {
            Ok(json) => info!(step, result = json.as_str(), "step completed"),
            Err(err) => warn!(step, error = %err, "could not encode result"),
        },
        Err(err) => warn!(step, error = %err, "step rejected"),
    }
}

async fn seed(svc: &Arc<dyn LibraryService>) -> Result<(), CommandError> {
    let items = AddItemCommand::new(svc.clone());
    items.execute(AddItemCommandRequest::new("345", "Phantom Tollbooth", ItemKind::book("Juster"))).await?;
    items.execute(AddItemCommandRequest::new("456", "...And His Orchestra", ItemKind::album("The Fastbacks"))).await?;
    items.execute(AddItemCommandRequest::new("567", "Laputa", ItemKind::movie("Miyazaki"))).await?;
    let patrons = AddPatronCommand::new(svc.clone());
    patrons.execute(AddPatronCommandRequest::new("abc", "Felicity")).await?;
    patrons.execute(AddPatronCommandRequest::new("bcd", "Waldo")).await?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CommandError> {
    setup_tracing();

    let svc = create_library_service(&Configuration::new("main"), GatewayPublisherVia::Logs);
    seed(&svc).await?;

    let checkout = CheckoutItemCommand::new(svc.clone());
    let advance = AdvanceDayCommand::new(svc.clone());
    let request = RequestItemCommand::new(svc.clone());
    let get_patron = GetPatronCommand::new(svc.clone());
    let pay = PayFineCommand::new(svc.clone());
    let returns = ReturnItemCommand::new(svc.clone());

    report("checkout album", checkout.execute(CheckoutItemCommandRequest::new("bcd", "456")).await);
    report("7 days pass", advance.execute(AdvanceDayCommandRequest::new(7)).await);
    report("checkout movie", checkout.execute(CheckoutItemCommandRequest::new("abc", "567")).await);
    report("request album", request.execute(RequestItemCommandRequest::new("abc", "456")).await);
    report("57 days pass", advance.execute(AdvanceDayCommandRequest::new(57)).await);

    let waldo = get_patron.execute(GetPatronCommandRequest::new("bcd")).await?;
    report("pay fine", pay.execute(PayFineCommandRequest::new("bcd", waldo.patron.fine_balance)).await);
    report("return album", returns.execute(ReturnItemCommandRequest::new("456")).await);
    report("holdings", Ok(svc.holdings().await));
    report("members", Ok(svc.members().await));
    Ok(())
}
