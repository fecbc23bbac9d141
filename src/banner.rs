// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    let banner = r#"
     _ _ _   _                                              
 ___| (_) |_| |__   ___ _ __   ___  ___ _ ____   _____ _ __ 
/ __| | | __| '_ \ / _ \ '__| / __|/ _ \ '__\ \ / / _ \ '__|
\__ \ | | |_| | | |  __/ |    \__ \  __/ |   \ V /  __/ |   
|___/_|_|\__|_| |_|\___|_|    |___/\___|_|    \_/ \___|_|   

    Solidity static analysis over HTTP
"#;
    println!("{}", banner);
}
