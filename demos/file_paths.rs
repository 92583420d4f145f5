use urlref::{DriveDetection, Options, UrlReference};

fn main() {
    // Windows paths become file URLs
    let path = UrlReference::new("C:\\Users\\someone\\notes.txt").expect("Failed to parse path");
    println!("String: {path}"); // file:C:/Users/someone/notes.txt
    println!("Href: {}", path.href()); // file:///C:/Users/someone/notes.txt
    println!("Drive: {:?}", path.driveletter()); // Some("C:")
    println!("Pathname: {}", path.pathname()); // C:/Users/someone/notes.txt

    // Relative paths keep the drive of their base
    let sibling = UrlReference::parse("..\\shared\\todo.txt", "file:///D:/work/project/")
        .and_then(|url| url.resolve(None::<&str>))
        .expect("Failed to resolve path");
    println!("Sibling: {sibling}"); // file:///D:/work/shared/todo.txt

    // UNC paths carry the server as host
    let share = UrlReference::new("\\\\server\\share\\doc.txt").expect("Failed to parse UNC path");
    println!("Share host: {:?}", share.hostname()); // Some("server")

    // Drive detection in the pathname setter is configurable
    for policy in [
        DriveDetection::Detect,
        DriveDetection::DetectAndAssumeFile,
        DriveDetection::Ignore,
    ] {
        let mut url = UrlReference::new("notes/today.md")
            .expect("Failed to parse path")
            .with_options(Options::default().with_pathname_drive(policy));
        url.set_pathname(Some("E:/backup/today.md"))
            .expect("Failed to set pathname");
        println!(
            "{policy:?}: scheme={:?} drive={:?} string={url}",
            url.scheme(),
            url.driveletter()
        );
    }
}
