use std::path::Path;

use portfolio_site::export::write_site;

fn main() {
    let path = write_site(Path::new("dist")).expect("Should be able to write site snapshot");
    println!("wrote {}", path.display());
}
