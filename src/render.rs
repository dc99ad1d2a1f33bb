use crate::prediction::{PredictionResponse, TopFeature};
use crate::view::ViewState;

pub const CONNECTION_ERROR_MESSAGE: &str = "Could not connect to server. Please try again.";

/// Renders a view as an HTML fragment for the result panel. Pure: the only
/// way anything reaches the page is through a `PanelSurface::apply_html` call.
pub fn render(view: &ViewState) -> String {
    match view {
        ViewState::Hidden => String::new(),
        ViewState::Loading => render_loading(),
        ViewState::Success(data) => render_success(data),
        ViewState::ServerError(message) => render_server_error(message),
        ViewState::ConnectionError => render_connection_error(),
    }
}

/// All server-supplied strings pass through here before interpolation.
pub fn escape_html(input: &str) -> String {
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

fn render_loading() -> String {
    concat!(
        r#"<div class="loading" style="display:block;">"#,
        r#"<div class="spinner"></div>"#,
        r#"<p style="font-size:1.2em; color:var(--accent-primary); font-family:'Outfit', sans-serif;">Analyzing patient data...</p>"#,
        "</div>"
    )
    .to_owned()
}

fn render_server_error(message: &str) -> String {
    format!(
        concat!(
            r#"<div style="text-align:center; padding:40px;">"#,
            r#"<h2 style="color:var(--danger); font-size:2.5em; margin-bottom:15px; font-family:'Outfit', sans-serif;">⚠️ Error</h2>"#,
            r#"<p style="font-size:1.2em; color:var(--text-secondary);">{}</p>"#,
            "</div>"
        ),
        escape_html(message)
    )
}

fn render_connection_error() -> String {
    format!(
        concat!(
            r#"<div style="text-align:center; padding:40px;">"#,
            r#"<h2 style="color:var(--danger); font-size:2.5em; margin-bottom:15px; font-family:'Outfit', sans-serif;">⚠️ Connection Error</h2>"#,
            r#"<p style="color:var(--text-secondary); font-size:1.1em;">{}</p>"#,
            "</div>"
        ),
        CONNECTION_ERROR_MESSAGE
    )
}

fn render_success(data: &PredictionResponse) -> String {
    let is_high = data.is_high_risk();
    let risk_style = if is_high { "high-risk" } else { "low-risk" };

    let features_html: String = data
        .top_features
        .iter()
        .enumerate()
        .map(|(i, f)| render_feature(i + 1, f, risk_style))
        .collect();

    let recommendations_html: String = data
        .recommendations
        .iter()
        .map(|r| format!("<li>{}</li>", escape_html(r)))
        .collect();

    format!(
        concat!(
            r#"<div class="result-header {risk_style}">"#,
            "<h2>{header}</h2>",
            r#"<div class="risk-badge {risk_class}">{prediction}</div>"#,
            "</div>",
            r#"<div class="probability-bars">"#,
            r#"<h3 style="margin-bottom:20px; color:var(--text-primary); font-size:1.8em; font-family:'Outfit', sans-serif;">📊 Prediction Confidence</h3>"#,
            r#"<div class="probability-bar">"#,
            "<label>🔴 High Risk Probability</label>",
            r#"<div class="bar-container">"#,
            r#"<div class="bar-fill high-risk" style="width:{high_prob:.1}%">{high_prob:.1}%</div>"#,
            "</div>",
            "</div>",
            r#"<div class="probability-bar">"#,
            "<label>🟢 Low Risk Probability</label>",
            r#"<div class="bar-container">"#,
            r#"<div class="bar-fill low-risk" style="width:{low_prob:.1}%">{low_prob:.1}%</div>"#,
            "</div>",
            "</div>",
            "</div>",
            r#"<div class="top-features">"#,
            "<h3>📈 Top 5 Contributing Features</h3>",
            "{features}",
            "</div>",
            r#"<div class="recommendations">"#,
            "<h3>{recommendations_header}</h3>",
            "<ul>{recommendations}</ul>",
            "</div>",
            r#"<div style="text-align:center; margin-top:40px;">"#,
            r#"<button onclick="resetForm()" class="btn-predict" style="background: linear-gradient(90deg, #1c2331, #2d3851); max-width:350px;">🔄 New Prediction</button>"#,
            "</div>"
        ),
        risk_style = risk_style,
        header = if is_high { "⚠️ HIGH RISK DETECTED" } else { "✅ LOW RISK" },
        risk_class = escape_html(&data.risk_class),
        prediction = escape_html(&data.prediction),
        high_prob = data.high_risk_probability,
        low_prob = data.low_risk_probability,
        features = features_html,
        recommendations_header = if is_high { "⚠️ Action Required" } else { "✅ Health Maintenance Tips" },
        recommendations = recommendations_html,
    )
}

fn render_feature(position: usize, feature: &TopFeature, risk_style: &str) -> String {
    format!(
        concat!(
            r#"<div class="feature-item">"#,
            "<strong>{position}. {name}</strong>",
            r#"<span class="feature-val" style="float:right;">{value:.2}</span>"#,
            r#"<div class="bar-container" style="height:15px; margin-top:12px;">"#,
            r#"<div class="bar-fill {risk_style}" style="width:{importance:.1}%; font-size:0.7em;">{importance:.1}%</div>"#,
            "</div>",
            "</div>"
        ),
        position = position,
        name = escape_html(&feature.name),
        value = feature.value,
        importance = feature.importance,
        risk_style = risk_style,
    )
}
