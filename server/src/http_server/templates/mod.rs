use maud::{html, Markup, DOCTYPE};

pub(crate) mod posts;

pub fn head() -> Markup {
    html! {
      head {
        meta charset="utf-8";
        title { "Posts" }
      }
    }
}

pub fn header() -> Markup {
    html! {
      nav class="flex" {
        ul class="flex flex-row items-center" {
          li {
            a href="/" { "Posts" }
          }
        }
      }
    }
}

pub fn base(inner: Markup) -> Markup {
    html! {
      (DOCTYPE)
      html {
        (head())

        body class="px-4 max-w-5xl m-auto font-sans" {
          (header())

          (inner)
        }
      }
    }
}
