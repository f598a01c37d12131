// src/banner.rs

/// Prints the dashboard startup banner to the console.
pub fn print_banner() {
    // Using a raw string literal for the multi-line banner
    let banner = r#"
            _                 _       _
   ___ __ _| | _____      ____ _| |_ ___| |__
  / __/ _` | |/ __\ \ /\ / / _` | __/ __| '_ \
 | (_| (_| | | (__ \ V  V / (_| | || (__| | | |
  \___\__,_|_|\___| \_/\_/ \__,_|\__\___|_| |_|

    Live dashboard for the expression evaluation service
"#;
    println!("{}", banner);
}
