use console::style;

const FLAGS: &[(&str, &str)] = &[
    ("-gsu <username>", "GitHub username (required)"),
    ("-gsp <password>", "GitHub password or token (required)"),
    ("-gsr <project>", "project name, defaults to the current directory name"),
    ("-gss <solution>", "solution/repository name; turns on solution mode"),
    ("-gsd <description>", "repository description"),
    ("-gsm <message>", "message for the initial commit"),
    ("--private", "create a private repository"),
    ("--existing", "keep the current files, only add .gitignore"),
    ("--sln", "solution mode: project under src/<project> plus a .sln"),
    ("-h, --help", "show this help"),
];

pub fn usage() -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        style("gitstub: create a dotnet project, a GitHub repository, and push the first commit").bold()
    ));
    out.push_str("Usage: gitstub -gsu <username> -gsp <password> [options] [dotnet new args...]\n\n");
    out.push_str(&format!("{}\n", style("Options:").bold()));
    for (flag, about) in FLAGS {
        out.push_str(&format!("  {flag:<20} {about}\n"));
    }
    out.push_str("\nAny other argument is passed to `dotnet new` unchanged, e.g. `console`.\n");
    out.push_str("\nExit codes: 0 ok, 1 missing credentials, 2 bad arguments or GitHub error,\n");
    out.push_str("            3 git/dotnet failure, 4 local I/O or settings error\n");
    out
}

pub fn print() {
    println!("{}", usage());
}
