mod welcome;
