//! HTML fixtures shaped like NetrunnerDB search and detail pages.

pub const SURE_GAMBLE_URL: &str = "https://netrunnerdb.com/en/card/01050";

pub const SURE_GAMBLE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Sure Gamble &middot; NetrunnerDB</title></head>
<body>
<div class="container">
  <div class="panel panel-default">
    <div class="panel-heading">
      <h3 class="panel-title">
        <a href="https://netrunnerdb.com/en/card/01050" class="card-title">Sure Gamble</a>
      </h3>
    </div>
    <div class="panel-body">
      <div class="card-info">
        Event
        &bull; Cost: 5
        &bull; Influence: 1
      </div>
      <div class="card-text">
        <p>Gain 9<span class="icon icon-credit"></span>.</p>
      </div>
      <div class="card-flavor">"Fortune favors the bold."</div>
      <div class="card-illustrator">Shaper &bull; Core Set #50 &bull; Illustrated by Luca Zontini</div>
    </div>
  </div>
</div>
</body>
</html>"#;

pub const SURE_SEARCH_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
<table class="table">
  <thead><tr><th>Title</th><th>Faction</th></tr></thead>
  <tbody>
    <tr>
      <td data-th="Title"><a href="https://netrunnerdb.com/en/card/08024">Unsure Thing</a></td>
      <td data-th="Faction">Neutral</td>
    </tr>
    <tr>
      <td data-th="Title">
        <a href="https://netrunnerdb.com/en/card/01050">Sure   Gamble</a>
      </td>
      <td data-th="Faction">Shaper</td>
    </tr>
    <tr>
      <td data-th="Title"><a href="https://netrunnerdb.com/en/card/09999">Surely Not</a></td>
      <td data-th="Faction">Criminal</td>
    </tr>
  </tbody>
</table>
</body>
</html>"#;

pub const FIVE_RESULTS_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
<table class="table">
  <tbody>
    <tr><td data-th="Title"><a href="https://netrunnerdb.com/en/card/01001">Noise</a></td></tr>
    <tr><td data-th="Title"><a href="https://netrunnerdb.com/en/card/01002">Déjà Vu</a></td></tr>
    <tr><td data-th="Title"><a href="https://netrunnerdb.com/en/card/01003">Demolition Run</a></td></tr>
    <tr><td data-th="Title"><a href="https://netrunnerdb.com/en/card/01004">Stimhack</a></td></tr>
    <tr><td data-th="Title"><a href="https://netrunnerdb.com/en/card/01005">Cyberfeeder</a></td></tr>
  </tbody>
</table>
</body>
</html>"#;

pub const NO_RESULTS_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
<div class="container"><p>No results.</p></div>
</body>
</html>"#;

/// A detail page with one panel.
pub fn detail_page(title: &str, info: &str, paragraphs: &[&str], illustrator: &str) -> String {
    let paragraphs: String = paragraphs
        .iter()
        .map(|p| format!("<p>{}</p>\n", p))
        .collect();
    format!(
        r#"<html><body>
<div class="panel panel-default">
  <div class="panel-heading"><a href="https://netrunnerdb.com/en/card/00000" class="card-title">{title}</a></div>
  <div class="panel-body">
    <div class="card-info">{info}</div>
    <div class="card-text">
{paragraphs}    </div>
    <div class="card-illustrator">{illustrator}</div>
  </div>
</div>
</body></html>"#
    )
}
