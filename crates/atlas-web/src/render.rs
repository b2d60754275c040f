/// Template environment, compiled once at startup.
///
/// Templates are embedded in the binary; the dataset is the only external
/// file the running server reads.
use minijinja::Environment;

pub fn build_environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("base.html", include_str!("../templates/base.html"))?;
    env.add_template("index.html", include_str!("../templates/index.html"))?;
    env.add_template(
        "destination.html",
        include_str!("../templates/destination.html"),
    )?;
    env.add_template("quiz.html", include_str!("../templates/quiz.html"))?;
    env.add_template("about.html", include_str!("../templates/about.html"))?;
    env.add_template(
        "festivals.html",
        include_str!("../templates/festivals.html"),
    )?;
    Ok(env)
}
