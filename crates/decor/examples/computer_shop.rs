use micro_decor::decorator::{Decorator, DecoratorExt};
use micro_decor::{Brand, Catalog, Chain, Component, Computer, CustomAddOn, ExternalHdd, Monitor};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

fn show(label: &str, component: &impl Component) {
    info!(label, description = %component.description(), price = component.price(), "quote");
}

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    // statically typed chains
    let computer = Computer::from_brand(Brand::A);
    show("bare", &computer);
    show("monitor", &Monitor::wrap(computer.clone()));
    show("hdd + monitor", &ExternalHdd.and_then(Monitor).decorate(computer.clone()));
    show("monitor + hdd", &ExternalHdd.compose(Monitor).decorate(computer));

    // runtime chains
    let chain = Chain::builder()
        .base(Computer::from_brand(Brand::B))
        .add_on(Monitor)
        .add_on(CustomAddOn::new("keyboard", " and a keyboard", 60))
        .build();
    match chain {
        Ok(chain) => show("builder", &chain),
        Err(e) => error!(cause = %e, "failed to build chain"),
    }

    let catalog = Catalog::default();
    for add_ons in [&["external_hdd", "monitor"][..], &["monitor", "external_hdd"], &["printer"]] {
        match catalog.assemble(Brand::A.name(), add_ons) {
            Ok(chain) => show("catalog", &chain),
            Err(e) => error!(cause = %e, ?add_ons, "failed to assemble chain"),
        }
    }
}
