use lifeviz::{Event, Scene, Session, VizConfig};
use std::process::exit;

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("lifeviz-render: {}", msg);
    exit(1);
}

fn main() {
    // RUST_LOG overrides; stderr by default
    let _logger = flexi_logger::Logger::try_with_env_or_str("warn")
        .and_then(|l| l.start())
        .unwrap_or_else(|e| fail(format!("logger: {}", e)));

    let args: Vec<String> = std::env::args().collect();
    let mut data: Option<String> = None;
    let mut topology: Option<String> = None;
    let mut scene = Scene::Map;
    let mut country = "All".to_string();
    let mut year = "All".to_string();
    let mut out: Option<String> = None;
    for a in &args[1..] {
        if let Some(val) = a.strip_prefix("--data=") { data = Some(val.to_string()); }
        else if let Some(val) = a.strip_prefix("--topology=") { topology = Some(val.to_string()); }
        else if let Some(val) = a.strip_prefix("--scene=") {
            match val.parse().ok().and_then(Scene::from_index) {
                Some(s) => scene = s,
                None => fail(format!("scene must be 1, 2 or 3, got '{}'", val)),
            }
        }
        else if let Some(val) = a.strip_prefix("--country=") { country = val.to_string(); }
        else if let Some(val) = a.strip_prefix("--year=") { year = val.to_string(); }
        else if let Some(val) = a.strip_prefix("--out=") { out = Some(val.to_string()); }
        else { fail(format!("unknown argument '{}'", a)); }
    }
    let (Some(data), Some(topology)) = (data, topology) else {
        fail(concat!(
            "usage: lifeviz-render --data=<csv> --topology=<json> [--scene=1|2|3] ",
            "[--country=<name>] [--year=<year>] [--out=<svg>]"
        ));
    };

    let read = |path: &str| {
        std::fs::read_to_string(path).unwrap_or_else(|e| fail(format!("{}: {}", path, e)))
    };
    let csv_text = read(&data);
    let topo_text = read(&topology);

    let mut session = Session::new(VizConfig::default());
    if let Err(e) = session.load(&csv_text, &topo_text) {
        fail(e);
    }
    let mut events = vec![Event::SelectCountry(country), Event::SelectYear(year)];
    let mut s = Scene::FIRST;
    while s != scene {
        events.push(Event::Next);
        s = match s.next() {
            Some(n) => n,
            None => break,
        };
    }
    for ev in events {
        if let Err(e) = session.dispatch(ev) {
            fail(e);
        }
    }

    let svg = session.render_svg();
    match out {
        Some(path) => {
            if let Err(e) = std::fs::write(&path, svg) {
                fail(format!("{}: {}", path, e));
            }
        }
        None => println!("{}", svg),
    }
}
