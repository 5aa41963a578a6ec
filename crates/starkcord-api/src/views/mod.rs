//! HTML views
//!
//! Server-rendered pages for the analytics flow. Kept deliberately small:
//! a shared page shell, a timed-redirect notice, and the distribution page.

use starkcord_core::NetworkDistribution;

/// Seconds before a notice page redirects back home
const REDIRECT_DELAY_SECS: u32 = 5;

/// Escape text for interpolation into HTML
fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, head_extra: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         {head_extra}\
         </head>\n\
         <body>\n{body}\n</body>\n\
         </html>\n",
        title = escape(title),
    )
}

/// Notice page with a timed redirect back to the home page
pub fn redirect_notice(title: &str, description: &str) -> String {
    let refresh = format!(
        "<meta http-equiv=\"refresh\" content=\"{REDIRECT_DELAY_SECS};url=/\">\n"
    );
    let body = format!(
        "<main>\n\
         <h1>{}</h1>\n\
         <p>{}</p>\n\
         <p><a href=\"/\">Return home</a></p>\n\
         </main>",
        escape(title),
        escape(description),
    );
    page(title, &refresh, &body)
}

/// Expired-token notice
pub fn session_expired() -> String {
    redirect_notice(
        "Session Expired",
        "Your access token has expired. You'll be redirected shortly.",
    )
}

/// Unknown-guild notice
pub fn server_not_found() -> String {
    redirect_notice(
        "Server Not Found",
        "We could not find the server associated with this link. \
         Redirecting to the home page.",
    )
}

/// Analytics page: per-network counts with proportional bars, or an explicit
/// no-data message when nothing is connected
pub fn analytics_page(guild_name: &str, distribution: &NetworkDistribution) -> String {
    let mut body = String::new();
    body.push_str("<main>\n");
    body.push_str(&format!(
        "<p>Server Analytics for Guild: <b>{}</b></p>\n",
        escape(guild_name)
    ));
    body.push_str("<h2>Distribution of networks among connected wallets:</h2>\n");

    if distribution.is_empty() {
        body.push_str("<p>No user has connected their wallet at the moment.</p>\n");
    } else {
        let total = distribution.total();
        body.push_str("<ul>\n");
        for (label, count) in distribution.display_counts() {
            // Rounded percentage of all connected wallets
            let percent = (count as f64 / total as f64 * 100.0).round() as u64;
            body.push_str(&format!(
                "<li>{}: {count} ({percent}%)</li>\n",
                escape(&label)
            ));
        }
        body.push_str("</ul>\n");
    }

    body.push_str("</main>");
    page("Server Analytics", "", &body)
}

/// Minimal home page, the redirect destination for every notice
pub fn home_page() -> String {
    page(
        "starkcord",
        "",
        "<main>\n<h1>starkcord</h1>\n\
         <p>Connect your Starknet wallet to your Discord server.</p>\n\
         </main>",
    )
}
