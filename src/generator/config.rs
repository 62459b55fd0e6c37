//! Configuration and scaffold artifacts: dependency manifest, build
//! config, entry module, router, and app shell.

use serde_json::{json, Value};

use crate::artifact::{Artifact, ArtifactKind};
use crate::generator::markup::{html_text, ArtifactBuilder};
use crate::generator::GenContext;
use crate::resolver;
use crate::selection::Framework;

/// Builds every config/scaffold artifact for the selection.
#[must_use]
pub fn artifacts(ctx: &GenContext<'_>) -> Vec<Artifact> {
    let mut out = vec![package_manifest(ctx)];
    match ctx.profile.framework {
        Framework::React => {
            out.push(vite_config(ctx, "@vitejs/plugin-react", "react"));
            out.push(root_html(ctx, "root", "/src/index.jsx"));
            out.push(react_entry(ctx));
            out.push(react_app(ctx));
        }
        Framework::Vue => {
            out.push(vite_config(ctx, "@vitejs/plugin-vue", "vue"));
            out.push(root_html(ctx, "app", "/src/main.js"));
            out.push(vue_entry(ctx));
            out.push(vue_router(ctx));
            out.push(vue_app(ctx));
        }
        Framework::Html => {}
    }
    out.push(robots_txt());
    out.push(readme(ctx));
    out
}

/// Builds the `package.json` artifact.
///
/// Runtime dependencies are the framework's core packages plus the
/// packages required by the selected features, per the fixed catalog
/// table. serde_json keeps object keys sorted, so the output is stable.
#[must_use]
pub fn package_manifest(ctx: &GenContext<'_>) -> Artifact {
    let mut dependencies = serde_json::Map::new();
    for dep in ctx.profile.core_dependencies {
        dependencies.insert(dep.name.to_string(), Value::String(dep.version.to_string()));
    }
    for dep in resolver::feature_dependencies(ctx.selection) {
        dependencies.insert(dep.name.to_string(), Value::String(dep.version.to_string()));
    }

    let mut dev_dependencies = serde_json::Map::new();
    for dep in ctx.profile.dev_dependencies {
        dev_dependencies.insert(dep.name.to_string(), Value::String(dep.version.to_string()));
    }

    let mut scripts = serde_json::Map::new();
    for (name, command) in ctx.profile.scripts {
        scripts.insert((*name).to_string(), Value::String((*command).to_string()));
    }

    let manifest = json!({
        "name": ctx.selection.slug(),
        "version": "0.1.0",
        "private": true,
        "scripts": scripts,
        "dependencies": dependencies,
        "devDependencies": dev_dependencies,
    });

    let mut content =
        serde_json::to_string_pretty(&manifest).expect("package manifest serializes");
    content.push('\n');

    Artifact {
        path: ctx.profile.dependency_manifest_path().to_string(),
        kind: ArtifactKind::Config,
        content,
        declared_references: Vec::new(),
    }
}

fn vite_config(_ctx: &GenContext<'_>, plugin_package: &str, plugin_fn: &str) -> Artifact {
    let mut b = ArtifactBuilder::new("vite.config.js", ArtifactKind::Config);
    b.import_named("defineConfig", "vite");
    b.import_default(plugin_fn, plugin_package);
    b.blank();
    b.line("export default defineConfig({");
    b.line(&format!("  plugins: [{plugin_fn}()],"));
    b.line("});");
    b.finish()
}

fn root_html(ctx: &GenContext<'_>, mount_id: &str, entry_src: &str) -> Artifact {
    let mut b = ArtifactBuilder::new("index.html", ArtifactKind::Config);
    let name = html_text(ctx.selection.display_name());
    b.line("<!DOCTYPE html>");
    b.line("<html lang=\"en\">");
    b.line("  <head>");
    b.line("    <meta charset=\"UTF-8\">");
    b.line("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    b.line(&format!("    <title>{name}</title>"));
    b.line("  </head>");
    b.line("  <body>");
    b.line(&format!("    <div id=\"{mount_id}\"></div>"));
    b.script_module(entry_src);
    b.line("  </body>");
    b.line("</html>");
    b.finish()
}

fn react_entry(_ctx: &GenContext<'_>) -> Artifact {
    let mut b = ArtifactBuilder::new("src/index.jsx", ArtifactKind::Config);
    b.import_default("React", "react");
    b.import_default("ReactDOM", "react-dom/client");
    b.import_named("BrowserRouter", "react-router-dom");
    b.import_default("App", "./App");
    b.import_side_effect("./styles/global.css");
    b.blank();
    b.line("ReactDOM.createRoot(document.getElementById('root')).render(");
    b.line("  <React.StrictMode>");
    b.line("    <BrowserRouter>");
    b.line("      <App />");
    b.line("    </BrowserRouter>");
    b.line("  </React.StrictMode>,");
    b.line(");");
    b.finish()
}

/// React app shell: imports the navbar, footer, and every manifest page,
/// and registers one route per page. Pages without a shipped template are
/// still imported and routed here, which is what surfaces them to the
/// validator as dangling imports.
fn react_app(ctx: &GenContext<'_>) -> Artifact {
    let mut b = ArtifactBuilder::new("src/App.jsx", ArtifactKind::Component);
    b.import_default("React", "react");
    b.import_named("Routes, Route", "react-router-dom");
    b.import_default("Navbar", "./components/Navbar");
    b.import_default("Footer", "./components/Footer");
    for page in &ctx.manifest.pages {
        b.import_default(page.component_name(), &format!("./pages/{}", page.component_name()));
    }
    b.blank();
    b.line("function App() {");
    b.line("  return (");
    b.line("    <>");
    b.line("      <Navbar />");
    b.line("      <Routes>");
    for page in &ctx.manifest.pages {
        b.record_route(page.route_path());
        b.line(&format!(
            "        <Route path=\"{}\" element={{<{} />}} />",
            page.route_path(),
            page.component_name()
        ));
    }
    b.line("      </Routes>");
    b.line("      <Footer />");
    b.line("    </>");
    b.line("  );");
    b.line("}");
    b.blank();
    b.line("export default App;");
    b.finish()
}

fn vue_entry(_ctx: &GenContext<'_>) -> Artifact {
    let mut b = ArtifactBuilder::new("src/main.js", ArtifactKind::Config);
    b.import_named("createApp", "vue");
    b.import_default("App", "./App.vue");
    b.import_default("router", "./router/index.js");
    b.import_side_effect("./styles/global.css");
    b.blank();
    b.line("createApp(App).use(router).mount('#app');");
    b.finish()
}

fn vue_router(ctx: &GenContext<'_>) -> Artifact {
    let mut b = ArtifactBuilder::new("src/router/index.js", ArtifactKind::Config);
    b.import_named("createRouter, createWebHistory", "vue-router");
    for page in &ctx.manifest.pages {
        b.import_default(page.component_name(), &format!("../pages/{}.vue", page.component_name()));
    }
    b.blank();
    b.line("const routes = [");
    for page in &ctx.manifest.pages {
        b.record_route(page.route_path());
        b.line(&format!(
            "  {{ path: '{}', component: {} }},",
            page.route_path(),
            page.component_name()
        ));
    }
    b.line("];");
    b.blank();
    b.line("const router = createRouter({");
    b.line("  history: createWebHistory(),");
    b.line("  routes,");
    b.line("});");
    b.blank();
    b.line("export default router;");
    b.finish()
}

fn vue_app(_ctx: &GenContext<'_>) -> Artifact {
    let mut b = ArtifactBuilder::new("src/App.vue", ArtifactKind::Component);
    b.line("<template>");
    b.line("  <SiteNavbar />");
    b.line("  <router-view />");
    b.line("  <SiteFooter />");
    b.line("</template>");
    b.blank();
    b.line("<script>");
    b.import_default("SiteNavbar", "./components/Navbar.vue");
    b.import_default("SiteFooter", "./components/Footer.vue");
    b.blank();
    b.line("export default {");
    b.line("  name: 'App',");
    b.line("  components: { SiteNavbar, SiteFooter },");
    b.line("};");
    b.line("</script>");
    b.finish()
}

fn robots_txt() -> Artifact {
    Artifact {
        path: "robots.txt".to_string(),
        kind: ArtifactKind::Asset,
        content: "User-agent: *\nAllow: /\n".to_string(),
        declared_references: Vec::new(),
    }
}

fn readme(ctx: &GenContext<'_>) -> Artifact {
    let name = ctx.selection.display_name();
    let run = match ctx.profile.framework {
        Framework::React | Framework::Vue => "npm install\nnpm run dev",
        Framework::Html => "npm install\nnpm start",
    };
    let content = format!(
        "# {name}\n\nGenerated website project for {name}.\n\n## Getting started\n\n```\n{run}\n```\n"
    );
    Artifact {
        path: "README.md".to_string(),
        kind: ArtifactKind::Asset,
        content,
        declared_references: Vec::new(),
    }
}
