use crate::html;
use crate::http::response::Response;
use crate::pool::{HeaterState, PoolState, SharedPool};

/// Seconds between automatic control-page reloads.
const REFRESH_SECS: u32 = 30;

/// Column widths for the phone-sized control table.
const COL_WIDTHS: [u32; 2] = [540, 460];

/// Control page: temperatures plus the Spa and Lights toggle buttons.
pub async fn render(pool: &SharedPool) -> anyhow::Result<Response> {
    let pool = pool.read().await;

    let page = html::document(
        &html::body(&control_form(&pool), &pool.title),
        &[&pool.title],
        Some("/css/phone.css"),
        Some(&html::refresh_script(REFRESH_SECS)),
    );

    Ok(Response::html(page))
}

/// Builds the control form from a state snapshot.
///
/// Spa cell: `red` while the heater fires, `green` when the spa is on but
/// the heater is idle, `off`/`OFF` when the spa is off. Lights cell is
/// `lights`/`ON` when either aux circuit is energized.
fn control_form(pool: &PoolState) -> String {
    let air_temp = format!("{:3}", pool.air_temp);
    let pool_temp = format!("{:3}", pool.pool_temp);

    let (spa_color, spa_temp) = if pool.spa {
        let color = match pool.heater {
            HeaterState::On => "red",
            HeaterState::Off => "green",
        };
        (color, format!("{:3}", pool.spa_temp))
    } else {
        ("off", "OFF".to_string())
    };

    let (lights_color, lights_state) = if pool.lights_on() {
        ("lights", "ON")
    } else {
        ("off", "OFF")
    };

    let rows = [
        vec![html::div("label", "Air"), html::div("white", &air_temp)],
        vec![html::div("label", "Pool"), html::div("aqua", &pool_temp)],
        vec![
            html::input("submit", "mode", "Spa", "button"),
            html::div(spa_color, &spa_temp),
        ],
        vec![
            html::input("submit", "mode", "Lights", "button"),
            html::div(lights_color, lights_state),
        ],
    ];

    html::form(&html::table(&rows, &[], &COL_WIDTHS), "mode", "/mode")
}
