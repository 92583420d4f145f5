use urlref::UrlReference;

fn main() {
    // Parse a reference against a base
    let mut url = UrlReference::parse("../img/logo.png?v=2#top", "https://Example.com:443/docs/guide/")
        .expect("Failed to parse URL");

    println!("URL: {url}"); // https://Example.com:443/docs/guide/../img/logo.png?v=2#top
    println!("Scheme: {:?}", url.scheme()); // Some("https")
    println!("Hostname: {:?}", url.hostname()); // Some("Example.com")
    println!("Port: {:?}", url.port()); // Some(Number(443))
    println!("Dirs: {:?}", url.dirs()); // ["docs", "guide", "..", "img"]
    println!("Filename: {:?}", url.filename()); // Some("logo.png")
    println!("Query: {:?}", url.query()); // Some("v=2")
    println!("Fragment: {:?}", url.fragment()); // Some("top")

    // Resolve into a canonical absolute URL
    let resolved = url.resolve(None::<&str>).expect("Failed to resolve URL");
    println!("Resolved: {resolved}"); // https://example.com/docs/img/logo.png?v=2#top

    // Setters keep the reference valid, or leave it untouched
    url.set_filename(Some("icon.svg")).expect("Failed to set filename");
    url.set_fragment(None).expect("Failed to clear fragment");
    println!("Updated: {url}");

    if let Err(err) = url.set_port(Some(70000)) {
        println!("Rejected: {err}");
    }
}
