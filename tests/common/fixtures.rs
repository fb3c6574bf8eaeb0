//! Reusable package layouts.

/// The canonical layout: one package, one nested subpackage without a marker.
pub const SIMPLE_PACKAGE: &[(&str, &str)] = &[
    ("pkg/__init__.py", ""),
    ("pkg/a.py", "def a():\n    return 1\n"),
    ("pkg/sub/b.py", "def b():\n    return 2\n"),
];

/// A project with a virtualenv, a build descriptor and an entry point.
pub const PROJECT_WITH_VENV: &[(&str, &str)] = &[
    ("setup.py", "from setuptools import setup\nsetup()\n"),
    ("app/__init__.py", ""),
    ("app/__main__.py", "from app.core import run\nrun()\n"),
    ("app/core.py", "def run():\n    pass\n"),
    ("app/util/helpers.py", "X = 1\n"),
    (".venv/lib/site.py", "# third party\n"),
    ("venv/lib/cext.c", "/* third party */\n"),
];
