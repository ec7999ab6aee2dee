use maud::{DOCTYPE, Markup, PreEscaped, html};

pub const TITLE: &str = "PREMIUM BEACH TENNIS TOUR RANKING";
pub const DESCRIPTION: &str = "Ranking oficial do circuito Premium Beach Tennis";

const STYLES: &str = r#"
body { margin: 0; font-family: Inter, system-ui, sans-serif; background: #f4f1ea; color: #1d1d1d; }
main { max-width: 1100px; margin: 0 auto; padding: 0 16px; }
.banner { text-align: center; padding: 32px 0 8px; }
.banner h1 { margin: 0; font-size: 2rem; letter-spacing: .04em; }
.banner p { margin: 8px 0 0; color: #6b6257; }
.champions { display: flex; justify-content: center; gap: 24px; padding: 24px 0; }
.zoom { display: flex; flex-direction: column; align-items: center; width: 140px; }
.zoom .position { font-size: 1.5rem; font-weight: 700; }
.zoom img, .zoom .avatar { width: 96px; height: 96px; border-radius: 50%; object-fit: cover; }
.avatar { display: flex; align-items: center; justify-content: center; background: #d8cfc2; font-weight: 700; }
.zoom .name { margin-top: 8px; text-align: center; font-weight: 600; }
.select-category { display: flex; justify-content: flex-end; padding: 16px 0; }
.select-category label { margin-right: 8px; }
table { width: 100%; border-collapse: collapse; background: #fff; box-shadow: 0 1px 3px rgba(0,0,0,.2); }
th, td { padding: 16px; border-bottom: 1px solid #e0e0e0; text-align: center; }
td.rank { font-size: 18px; text-align: left; }
.user-cell { display: flex; align-items: center; gap: 12px; justify-content: center; }
.user-cell img, .user-cell .avatar { width: 40px; height: 40px; border-radius: 50%; object-fit: cover; }
.pagination { display: flex; align-items: center; justify-content: flex-end; gap: 16px; }
.pagination .nav { display: inline-block; padding: 4px 8px; text-decoration: none; color: inherit; }
.pagination .nav.disabled { color: #bdbdbd; }
.table-wide { margin-bottom: 128px; }
footer { text-align: center; padding: 24px 0; color: #6b6257; }
"#;

/// Reload with the measured width whenever the layout class changes
const VIEWPORT_SCRIPT: &str = r#"
(function () {
  var breakpoint = BREAKPOINT;
  var rendered = document.documentElement.dataset.wide === "true";
  function sync() {
    var wide = window.innerWidth >= breakpoint;
    if (wide === rendered) return;
    var url = new URL(window.location.href);
    url.searchParams.set("vw", String(window.innerWidth));
    window.location.replace(url.toString());
  }
  window.addEventListener("resize", sync);
  document.addEventListener("visibilitychange", function () {
    if (document.visibilityState === "visible" && navigator.sendBeacon) {
      navigator.sendBeacon("/api/refocus");
    }
  });
  sync();
})();
"#;

pub fn document(wide: bool, breakpoint: u32, body: Markup) -> Markup {
    let script = VIEWPORT_SCRIPT.replace("BREAKPOINT", &breakpoint.to_string());
    html! {
        (DOCTYPE)
        html lang="pt-BR" data-wide=(if wide { "true" } else { "false" }) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="description" content=(DESCRIPTION);
                title { (TITLE) }
                style { (PreEscaped(STYLES)) }
            }
            body {
                (body)
                script { (PreEscaped(script)) }
            }
        }
    }
}

pub fn banner() -> Markup {
    html! {
        header.banner {
            h1 { (TITLE) }
            p { (DESCRIPTION) }
        }
    }
}

pub fn footer() -> Markup {
    html! {
        footer {
            p { "Premium Beach Tennis Tour" }
        }
    }
}

/// Circle with the first letter of the name, used when a player has no picture
pub fn avatar(name: &str, image_url: Option<&str>) -> Markup {
    html! {
        @if let Some(url) = image_url {
            img src=(url) alt="Profile" loading="lazy";
        } @else {
            div.avatar { (initial(name)) }
        }
    }
}

fn initial(name: &str) -> String {
    name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_carries_metadata_and_layout_flag() {
        let page = document(false, 975, html! { p { "hi" } }).into_string();
        assert!(page.contains("<title>PREMIUM BEACH TENNIS TOUR RANKING</title>"));
        assert!(page.contains(r#"data-wide="false""#));
        assert!(page.contains("var breakpoint = 975;"));
    }

    #[test]
    fn avatar_falls_back_to_initial() {
        assert!(avatar("bia", None).into_string().contains(">B</div>"));
        assert!(avatar("bia", Some("https://cdn/b.png")).into_string().contains(r#"src="https://cdn/b.png""#));
    }
}
