//! Minimal demo: decode a coordinate-grid document served by an in-process
//! fixture server.
//!
//! Run with: cargo run --example decode_local

use docgrid::{decode_document, FetchConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Use a tiny HTTP server to provide deterministic content for the demo
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr();

    std::thread::spawn(move || {
        if let Ok(req) = server.recv() {
            // Block characters spelling "HI" on a 5x3 plane
            let html = r#"<html><body><table>
<tr><td>x-coordinate</td><td>Character</td><td>y-coordinate</td></tr>
<tr><td>0</td><td>&#9608;</td><td>0</td></tr>
<tr><td>0</td><td>&#9608;</td><td>1</td></tr>
<tr><td>0</td><td>&#9608;</td><td>2</td></tr>
<tr><td>1</td><td>&#9608;</td><td>1</td></tr>
<tr><td>2</td><td>&#9608;</td><td>0</td></tr>
<tr><td>2</td><td>&#9608;</td><td>1</td></tr>
<tr><td>2</td><td>&#9608;</td><td>2</td></tr>
<tr><td>4</td><td>&#9608;</td><td>0</td></tr>
<tr><td>4</td><td>&#9608;</td><td>1</td></tr>
<tr><td>4</td><td>&#9608;</td><td>2</td></tr>
</table></body></html>"#;
            let _ = req.respond(tiny_http::Response::from_string(html));
        }
    });

    let url = format!("http://{}", addr);
    println!("Decoding: {}\n", url);

    let lines = decode_document(&url, FetchConfig::default())?;
    for line in lines {
        println!("{}", line);
    }

    Ok(())
}
