use anyhow::{anyhow, Result};
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use std::sync::Arc;

pub struct Browser {
    browser: ChromeBrowser,
}

impl Browser {
    pub fn launch() -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .build()
            .map_err(|e| anyhow!("launch options: {e}"))?;

        let browser = ChromeBrowser::new(options)?;

        Ok(Self { browser })
    }

    pub fn new_page(&self) -> Result<Page> {
        let tab = self.browser.new_tab()?;
        Ok(Page { tab })
    }
}

pub struct Page {
    tab: Arc<Tab>,
}

impl Page {
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    /// Waits for `selector` and returns its inner text.
    pub fn find_element(&self, selector: &str) -> Result<String> {
        let element = self.tab.wait_for_element(selector)?;
        let text = element.get_inner_text()?;
        Ok(text)
    }

    pub fn count(&self, selector: &str) -> Result<usize> {
        Ok(self.tab.find_elements(selector).map(|v| v.len()).unwrap_or(0))
    }

    /// Value of an attribute on the first element matching `selector`.
    pub fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>> {
        let element = self.tab.wait_for_element(selector)?;
        let attrs = element.get_attributes()?.unwrap_or_default();
        Ok(attrs
            .chunks(2)
            .find(|pair| pair.first().map(String::as_str) == Some(name))
            .and_then(|pair| pair.get(1).cloned()))
    }

    pub fn url(&self) -> Result<String> {
        Ok(self.tab.get_url())
    }
}
