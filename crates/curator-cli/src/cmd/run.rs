use curator_core::catalog::Catalog;
use curator_core::flow::Flow;

pub fn run(catalog: Catalog, streak: u32) -> anyhow::Result<()> {
    let app = crate::tui::App::new(Flow::new(catalog, streak));
    app.run()
}
