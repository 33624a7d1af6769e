//! Response formatters.
//!
//! One formatter per command: pure functions of (typed API response, user
//! input) that produce the ordered result rows. Absent API fields are
//! substituted with localized placeholders before display - a title or
//! subtitle never carries a missing value.

use crate::host::LauncherHost;
use crate::item::{ResultAction, ResultItem};
use crate::strings::{fmt1, tr};
use lens_core::{ApiInfo, HostInfo, LensError, MyIp, SearchMatch, SearchResults};

/// Open ports shown on a host row
const MAX_PORTS: usize = 20;
/// Hostname rows shown per host
const MAX_HOSTNAMES: usize = 5;
/// Vulnerability identifiers shown on the combined row
const MAX_VULNS: usize = 8;
/// Tags shown on the combined row
const MAX_TAGS: usize = 8;
/// Match rows shown per search page
const MAX_MATCHES: usize = 10;

fn host_url(ip: &str) -> String {
    format!("https://www.shodan.io/host/{ip}")
}

fn search_url(query: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("https://www.shodan.io/search?query={encoded}")
}

/// Group a count with thousands separators, e.g. `12345` -> `"12,345"`.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Render a wire timestamp in a compact human form, falling back to the
/// raw value when it doesn't parse.
fn render_timestamp(raw: &str) -> String {
    chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map_or_else(|_| raw.to_string(), |dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
}

fn open_host_subtitle(host: &dyn LauncherHost) -> String {
    tr(host, "shodan_lens_press_enter_open_host", "Press Enter to open on Shodan")
}

/// Rows for a host lookup.
pub fn host_items(info: &HostInfo, host: &dyn LauncherHost) -> Vec<ResultItem> {
    let url = host_url(&info.ip_str);
    let unknown = tr(host, "shodan_lens_unknown", "Unknown");
    let open_subtitle = open_host_subtitle(host);

    let ports_str = if info.ports.is_empty() {
        tr(host, "shodan_lens_none", "None")
    } else {
        info.ports
            .iter()
            .take(MAX_PORTS)
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };

    let org = info
        .org
        .clone()
        .unwrap_or_else(|| tr(host, "shodan_lens_org_unknown", "Unknown organization"));
    let country = info.country_name.as_deref().unwrap_or(&unknown);
    let city = info.city.as_deref().unwrap_or(&unknown);
    let os = info.os.as_deref().unwrap_or(&unknown);

    let mut items = vec![
        ResultItem::new(
            format!("{} - {org}", info.ip_str),
            format!("Location: {country}, {city} | OS: {os} | Ports: {ports_str}"),
        )
        .with_action(ResultAction::OpenUrl(url.clone())),
        ResultItem::new(
            format!(
                "{}: {}",
                tr(host, "shodan_lens_field_org", "Organization"),
                info.org.as_deref().unwrap_or(&unknown)
            ),
            open_subtitle.clone(),
        )
        .with_action(ResultAction::OpenUrl(url.clone())),
        ResultItem::new(
            format!(
                "{}: {}",
                tr(host, "shodan_lens_field_isp", "ISP"),
                info.isp.as_deref().unwrap_or(&unknown)
            ),
            format!(
                "{}: {}",
                tr(host, "shodan_lens_field_asn", "ASN"),
                info.asn.as_deref().unwrap_or(&unknown)
            ),
        )
        .with_action(ResultAction::OpenUrl(url.clone())),
        ResultItem::new(
            format!(
                "{}: {country}, {city}",
                tr(host, "shodan_lens_field_location", "Location")
            ),
            open_subtitle.clone(),
        )
        .with_action(ResultAction::OpenUrl(url.clone())),
        ResultItem::new(
            format!(
                "{}: {ports_str}",
                tr(host, "shodan_lens_field_ports", "Open ports")
            ),
            open_subtitle.clone(),
        )
        .with_action(ResultAction::OpenUrl(url.clone())),
    ];

    for hostname in info
        .hostnames
        .iter()
        .filter(|h| !h.trim().is_empty())
        .take(MAX_HOSTNAMES)
    {
        items.push(
            ResultItem::new(
                format!(
                    "{}: {hostname}",
                    tr(host, "shodan_lens_field_hostname", "Hostname")
                ),
                open_subtitle.clone(),
            )
            .with_action(ResultAction::OpenUrl(url.clone())),
        );
    }

    let vulns = info.vulns.identifiers();
    if !vulns.is_empty() {
        items.push(
            ResultItem::new(
                format!(
                    "{}: {}",
                    tr(host, "shodan_lens_field_vulns", "Vulnerabilities"),
                    vulns[..vulns.len().min(MAX_VULNS)].join(", ")
                ),
                open_subtitle.clone(),
            )
            .with_action(ResultAction::OpenUrl(url.clone())),
        );
    }

    if !info.tags.is_empty() {
        items.push(
            ResultItem::new(
                format!(
                    "{}: {}",
                    tr(host, "shodan_lens_field_tags", "Tags"),
                    info.tags[..info.tags.len().min(MAX_TAGS)].join(", ")
                ),
                open_subtitle.clone(),
            )
            .with_action(ResultAction::OpenUrl(url.clone())),
        );
    }

    if let Some(last_update) = info.last_update.as_deref().filter(|s| !s.trim().is_empty()) {
        items.push(
            ResultItem::new(
                format!(
                    "{}: {}",
                    tr(host, "shodan_lens_field_last_update", "Last update"),
                    render_timestamp(last_update)
                ),
                open_subtitle,
            )
            .with_action(ResultAction::OpenUrl(url)),
        );
    }

    items
}

/// Rows for a search: a total-count summary followed by up to
/// [`MAX_MATCHES`] matches in API order.
pub fn search_items(
    results: &SearchResults,
    query: &str,
    host: &dyn LauncherHost,
) -> Vec<ResultItem> {
    let mut items = vec![ResultItem::new(
        fmt1(
            &tr(host, "shodan_lens_search_found_title", "{0} results found"),
            &group_thousands(results.total),
        ),
        fmt1(
            &tr(host, "shodan_lens_search_found_subtitle", "Showing first 10 for: {0}"),
            query,
        ),
    )
    .with_action(ResultAction::OpenUrl(search_url(query)))];

    items.extend(
        results
            .matches
            .iter()
            .take(MAX_MATCHES)
            .map(|m| match_item(m, host)),
    );

    items
}

fn match_item(m: &SearchMatch, host: &dyn LauncherHost) -> ResultItem {
    let unknown = tr(host, "shodan_lens_unknown", "Unknown");

    let location = m.location.as_ref().map_or_else(
        || tr(host, "shodan_lens_location_unknown", "Unknown location"),
        |loc| {
            format!(
                "{}, {}",
                loc.country_name.as_deref().unwrap_or(&unknown),
                loc.city.as_deref().unwrap_or(&unknown)
            )
        },
    );

    let product = m
        .product
        .as_deref()
        .filter(|p| !p.is_empty())
        .map(|p| format!(" | {p}"))
        .unwrap_or_default();

    ResultItem::new(
        format!("{}:{}", m.ip_str, m.port),
        format!("{} | {location}{product}", m.org.as_deref().unwrap_or(&unknown)),
    )
    .with_action(ResultAction::OpenUrl(host_url(&m.ip_str)))
}

/// Row for account plan and credits. Selecting it copies a summary to the
/// clipboard.
pub fn info_item(info: &ApiInfo, host: &dyn LauncherHost) -> ResultItem {
    let unknown = tr(host, "shodan_lens_unknown", "Unknown");
    let plan = info.plan.as_deref().unwrap_or(&unknown);

    ResultItem::new(
        fmt1(&tr(host, "shodan_lens_info_title", "Plan: {0}"), plan),
        format!(
            "Search credits: {} | Scan credits: {}",
            info.query_credits, info.scan_credits
        ),
    )
    .with_action(ResultAction::CopyText(format!(
        "Plan: {plan}, Query: {}, Scan: {}",
        info.query_credits, info.scan_credits
    )))
}

/// Row for the caller's public IP.
pub fn myip_item(ip: &MyIp, host: &dyn LauncherHost) -> ResultItem {
    ResultItem::new(
        fmt1(&tr(host, "shodan_lens_myip_title", "Your IP: {0}"), ip.as_str()),
        open_host_subtitle(host),
    )
    .with_action(ResultAction::OpenUrl(host_url(ip.as_str())))
}

/// Row for a DNS resolution. An unresolved hostname renders the localized
/// "Not found" sentinel and carries no action.
pub fn resolve_item(hostname: &str, ip: Option<&str>, host: &dyn LauncherHost) -> ResultItem {
    match ip {
        Some(ip) => ResultItem::new(format!("{hostname} -> {ip}"), open_host_subtitle(host))
            .with_action(ResultAction::OpenUrl(host_url(ip))),
        None => ResultItem::new(
            format!(
                "{hostname} -> {}",
                tr(host, "shodan_lens_not_found", "Not found")
            ),
            tr(host, "shodan_lens_resolve_failed", "The hostname did not resolve"),
        ),
    }
}

/// Row for a reverse DNS lookup. Always links to the queried IP's host
/// page; only the first hostname of the response is surfaced.
pub fn reverse_item(ip: &str, hostname: Option<&str>, host: &dyn LauncherHost) -> ResultItem {
    let result = hostname.map_or_else(|| tr(host, "shodan_lens_not_found", "Not found"), String::from);

    ResultItem::new(format!("{ip} -> {result}"), open_host_subtitle(host))
        .with_action(ResultAction::OpenUrl(host_url(ip)))
}

/// Static rows describing every command.
pub fn help_items(host: &dyn LauncherHost) -> Vec<ResultItem> {
    vec![
        ResultItem::new(
            tr(host, "shodan_lens_help_host_title", "host <ip> - Information about an IP"),
            tr(host, "shodan_lens_help_host_subtitle", "Ex: host 8.8.8.8"),
        ),
        ResultItem::new(
            tr(host, "shodan_lens_help_search_title", "search <query> - Search devices"),
            tr(host, "shodan_lens_help_search_subtitle", "Ex: search apache country:FR"),
        ),
        ResultItem::new(
            tr(host, "shodan_lens_help_dns_title", "dns <hostname> - Resolve a domain"),
            tr(host, "shodan_lens_help_dns_subtitle", "Ex: dns google.com"),
        ),
        ResultItem::new(
            tr(host, "shodan_lens_help_reverse_title", "reverse <ip> - Reverse DNS"),
            tr(host, "shodan_lens_help_reverse_subtitle", "Ex: reverse 8.8.8.8"),
        ),
        ResultItem::new(
            tr(host, "shodan_lens_help_myip_title", "myip - Your public IP"),
            tr(host, "shodan_lens_help_myip_subtitle", "Get your public IP address"),
        ),
        ResultItem::new(
            tr(host, "shodan_lens_help_info_title", "info - Your account info"),
            tr(host, "shodan_lens_help_info_subtitle", "Show your Shodan credits"),
        ),
    ]
}

/// Single row directing the user to `help`.
pub fn unknown_command_item(host: &dyn LauncherHost) -> ResultItem {
    ResultItem::new(
        tr(host, "shodan_lens_unknown_command_title", "Unknown command"),
        tr(
            host,
            "shodan_lens_unknown_command_subtitle",
            "Type 'help' to see all available commands",
        ),
    )
}

/// Single row prompting for API key configuration. Selecting it opens the
/// settings surface.
pub fn config_needed_item(host: &dyn LauncherHost) -> ResultItem {
    ResultItem::new(
        tr(
            host,
            "shodan_lens_config_missing_title",
            "Shodan API key not configured",
        ),
        tr(
            host,
            "shodan_lens_config_missing_subtitle",
            "Please configure your API key in plugin settings",
        ),
    )
    .with_action(ResultAction::OpenSettings)
}

/// Single row for a failed dispatch. The underlying cause becomes the
/// subtitle.
pub fn error_item(err: &LensError, host: &dyn LauncherHost) -> ResultItem {
    ResultItem::new(
        tr(host, "shodan_lens_error_title", "Error"),
        err.to_string(),
    )
}
