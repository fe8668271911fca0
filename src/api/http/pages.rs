// src/api/http/pages.rs
// Server-rendered markup for the login front

/// Full login page.
///
/// The form posts to the external authentication service; this service
/// only serves the page.
pub fn login_page() -> &'static str {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8"/>
    <meta name="viewport" content="width=device-width, initial-scale=1"/>
    <title>Sign in - Wardrobe</title>
    <link rel="stylesheet" href="/assets/style.css"/>
</head>
<body>
    <main class="login">
        <h1>Wardrobe</h1>
        <form id="login-form" method="post" action="/auth/login">
            <label for="email">Email</label>
            <input id="email" name="email" type="email" autocomplete="email" required/>
            <label for="password">Password</label>
            <input id="password" name="password" type="password" autocomplete="current-password" required/>
            <button type="submit">Sign in</button>
        </form>
    </main>
</body>
</html>
"#
}
